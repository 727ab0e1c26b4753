use std::collections::BTreeMap;

use diesel::{OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::categories;

/// Category id the quiz uses to mean "every category".
pub const ALL_CATEGORIES: i32 = 0;

/// Categories keyed by id, the shape clients render their category menus from.
pub type CategoryMap = BTreeMap<i32, String>;

#[derive(Clone, Debug, Deserialize, Identifiable, Queryable, Serialize, PartialEq)]
#[diesel(table_name = categories)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub kind: &'a str,
}

impl Category {
    pub fn get_all(conn: &mut PgConnection) -> Result<Vec<Category>, Error> {
        use crate::schema::categories::dsl::{categories, id};

        let all_categories = categories.order(id).load::<Category>(conn)?;

        Ok(all_categories)
    }

    pub fn find_by_id(conn: &mut PgConnection, category_id: i32) -> Result<Category, Error> {
        use crate::schema::categories::dsl::categories;

        categories
            .find(category_id)
            .first::<Category>(conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Category {} not found", category_id)))
    }

    pub fn as_map(categories: &[Category]) -> CategoryMap {
        categories
            .iter()
            .map(|category| (category.id, category.kind.clone()))
            .collect()
    }
}

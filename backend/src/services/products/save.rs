use crate::db;
use actix_web::{web, Responder};
use common::requests::SaveProductRequest;
use rusqlite::{params, Connection};
use uuid::Uuid;

pub(crate) async fn process(payload: web::Json<SaveProductRequest>) -> impl Responder {
    match save_product(payload.into_inner()) {
        Ok(id) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "id": id })),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error saving product: {}", e)),
    }
}

fn save_product(payload: SaveProductRequest) -> Result<String, String> {
    if payload.name.trim().is_empty() {
        return Err("Product name must not be empty".to_string());
    }

    let id = payload
        .id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let conn = db::open().map_err(|e| e.to_string())?;
    upsert_product(&conn, &id, payload.name.trim()).map_err(|e| e.to_string())?;

    Ok(id)
}

/// Inserts a product or renames it in place.
///
/// The conflict target is pinned to `id`: a save that collides with another
/// product's name must fail on the `name` UNIQUE constraint, not replace
/// that product. A blanket `INSERT OR REPLACE` would delete the other row
/// and strand its template files.
fn upsert_product(conn: &Connection, id: &str, name: &str) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT INTO products (id, name) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET name = excluded.name",
        params![id, name],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        conn
    }

    fn product_ids(conn: &Connection) -> Vec<String> {
        let mut stmt = conn.prepare("SELECT id FROM products ORDER BY id ASC").unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn saving_the_same_id_renames_in_place() {
        let conn = test_conn();
        upsert_product(&conn, "p1", "warung").unwrap();
        upsert_product(&conn, "p1", "warung-makan").unwrap();

        assert_eq!(product_ids(&conn), vec!["p1".to_string()]);
        let name: String = conn
            .query_row("SELECT name FROM products WHERE id = 'p1'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(name, "warung-makan");
    }

    #[test]
    fn duplicate_name_errors_instead_of_replacing_the_other_product() {
        let conn = test_conn();
        upsert_product(&conn, "p1", "warung").unwrap();
        conn.execute(
            "INSERT INTO template_files (product_id, path, content, content_md5)
             VALUES ('p1', 'index.html', '{{store_name}}', '')",
            [],
        )
        .unwrap();

        // A new product claiming an existing name must be rejected...
        assert!(upsert_product(&conn, "p2", "warung").is_err());

        // ...leaving the original product and its template stock intact.
        assert_eq!(product_ids(&conn), vec!["p1".to_string()]);
        let templates: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM template_files WHERE product_id = 'p1'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(templates, 1);
    }
}

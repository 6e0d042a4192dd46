use crate::db;
use actix_web::Responder;
use common::model::product::Product;

pub(crate) async fn process() -> impl Responder {
    match list_products() {
        Ok(products) => actix_web::HttpResponse::Ok().json(products),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error listing products: {}", e)),
    }
}

fn list_products() -> Result<Vec<Product>, String> {
    let conn = db::open().map_err(|e| e.to_string())?;
    let mut stmt = conn
        .prepare("SELECT id, name FROM products ORDER BY name ASC")
        .map_err(|e| e.to_string())?;
    let product_iter = stmt
        .query_map([], |row| {
            Ok(Product {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(product_iter.filter_map(Result::ok).collect())
}

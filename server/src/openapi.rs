//! OpenAPI 3.0 description of the item API, served at `GET /openapi.json`.
//!
//! Body and item schemas are derived from the model types with `schemars`;
//! the envelope around them and the path table are written out here.

use schemars::gen::SchemaSettings;
use serde_json::{json, Value};

use crate::model::{CreateItem, Item, UpdateItem};

fn envelope(response_object: &Value) -> Value {
    json!({
        "type": "object",
        "required": ["success", "message", "responseObject", "statusCode"],
        "properties": {
            "success": { "type": "boolean" },
            "message": { "type": "string" },
            "responseObject": response_object,
            "statusCode": { "type": "integer" },
        },
    })
}

fn response(description: &str, response_object: &Value) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": envelope(response_object) },
        },
    })
}

fn failure(description: &str) -> Value {
    response(description, &json!({ "nullable": true }))
}

fn request_body(schema: &Value) -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": { "schema": schema },
        },
    })
}

pub fn document() -> Value {
    let mut generator = SchemaSettings::openapi3().into_generator();
    let item = json!(generator.subschema_for::<Item>());
    let create = json!(generator.subschema_for::<CreateItem>());
    let update = json!(generator.subschema_for::<UpdateItem>());
    let schemas = generator.take_definitions();

    let items = json!({ "type": "array", "items": item });
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "string", "format": "uuid" },
    });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "todo-server",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/items": {
                "get": {
                    "operationId": "listItems",
                    "tags": ["Item"],
                    "responses": {
                        "200": response("items retrieved successfully", &items),
                        "500": failure("error occurred while retrieving items."),
                    },
                },
                "post": {
                    "operationId": "createItem",
                    "tags": ["Item"],
                    "requestBody": request_body(&create),
                    "responses": {
                        "201": response("item created successfully", &item),
                        "400": failure("Invalid input"),
                        "500": failure("error occurred while creating the item."),
                    },
                },
            },
            "/items/{id}": {
                "get": {
                    "operationId": "getItem",
                    "tags": ["Item"],
                    "parameters": [id_param],
                    "responses": {
                        "200": response("item retrieved successfully", &item),
                        "400": failure("Invalid input"),
                        "404": failure("item not found"),
                        "500": failure("error occurred while retrieving the item."),
                    },
                },
                "put": {
                    "operationId": "updateItem",
                    "tags": ["Item"],
                    "parameters": [id_param],
                    "requestBody": request_body(&update),
                    "responses": {
                        "200": response("item updated successfully", &item),
                        "400": failure("Invalid input"),
                        "404": failure("item not found"),
                        "500": failure("error occurred while updating the item."),
                    },
                },
                "delete": {
                    "operationId": "deleteItem",
                    "tags": ["Item"],
                    "parameters": [id_param],
                    "responses": {
                        "204": { "description": "item deleted successfully" },
                        "400": failure("Invalid input"),
                        "404": failure("item not found"),
                        "500": failure("error occurred while deleting the item."),
                    },
                },
            },
        },
        "components": {
            "schemas": schemas,
        },
    })
}

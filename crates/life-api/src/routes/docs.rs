//! OpenAPI description of the board endpoints.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

/// Builds the OpenAPI 3.0 document for the service.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn openapi_document() -> Value {
    let board_id = json!({
        "name": "board_id", "in": "path", "required": true,
        "schema": { "type": "string", "format": "uuid" }
    });
    let board_view = json!({
        "200": {
            "description": "Board snapshot",
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/BoardView" } } }
        },
        "400": { "$ref": "#/components/responses/Error" },
        "404": { "$ref": "#/components/responses/Error" },
        "500": { "$ref": "#/components/responses/Error" }
    });
    let count = |name: &str| {
        json!({
            "name": name, "in": "path", "required": true,
            "schema": { "type": "integer", "format": "int32", "minimum": 0 }
        })
    };

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Game of Life API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/api/v1/boards/add": {
                "post": {
                    "summary": "Store a new board",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/AddBoardRequest" } } }
                    },
                    "responses": {
                        "201": {
                            "description": "Board stored",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/AddBoardResponse" } } }
                        },
                        "400": { "$ref": "#/components/responses/Error" },
                        "500": { "$ref": "#/components/responses/Error" }
                    }
                }
            },
            "/api/v1/boards/{board_id}": {
                "get": {
                    "summary": "Get a stored board",
                    "parameters": [board_id],
                    "responses": board_view
                }
            },
            "/api/v1/boards/{board_id}/next": {
                "get": {
                    "summary": "Get the next generation",
                    "parameters": [board_id],
                    "responses": board_view
                }
            },
            "/api/v1/boards/{board_id}/steps/{steps}": {
                "get": {
                    "summary": "Get the board after a number of generations",
                    "parameters": [board_id, count("steps")],
                    "responses": board_view
                }
            },
            "/api/v1/boards/{board_id}/final/{max_attempts}": {
                "get": {
                    "summary": "Get the first fixed point within a number of generations",
                    "parameters": [board_id, count("max_attempts")],
                    "responses": board_view
                }
            },
            "/health": {
                "get": {
                    "summary": "Health check",
                    "responses": { "200": { "description": "Service is up" } }
                }
            }
        },
        "components": {
            "schemas": {
                "Cells": {
                    "type": "array",
                    "items": { "type": "array", "items": { "type": "integer", "enum": [0, 1] } }
                },
                "AddBoardRequest": {
                    "type": "object",
                    "required": ["rows", "columns", "state"],
                    "properties": {
                        "rows": { "type": "integer", "minimum": 1 },
                        "columns": { "type": "integer", "minimum": 1 },
                        "state": { "$ref": "#/components/schemas/Cells" }
                    }
                },
                "AddBoardResponse": {
                    "type": "object",
                    "properties": { "board_id": { "type": "string", "format": "uuid" } }
                },
                "BoardView": {
                    "type": "object",
                    "properties": {
                        "board_id": { "type": "string", "format": "uuid" },
                        "rows": { "type": "integer" },
                        "columns": { "type": "integer" },
                        "state": { "$ref": "#/components/schemas/Cells" }
                    }
                },
                "ErrorBody": {
                    "type": "object",
                    "properties": {
                        "error": {
                            "type": "string",
                            "enum": ["board_not_found", "no_stable_state", "validation_error", "infrastructure_error"]
                        },
                        "message": { "type": "string" }
                    }
                }
            },
            "responses": {
                "Error": {
                    "description": "Error",
                    "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorBody" } } }
                }
            }
        }
    })
}

/// GET /api-docs/openapi.json
async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

/// Returns the API documentation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}

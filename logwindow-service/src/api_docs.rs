use serde_json::{json, Value};

/// OpenAPI description of the public endpoints.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.2",
        "info": {
            "title": "LogWindow show-logs API",
            "description": "Pages through the logs of one user around an anchor timestamp.",
            "termsOfService": "/tos",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/show-logs/": {
                "get": {
                    "summary": "Return the logs of a user around an anchor timestamp.",
                    "operationId": "findLogsByTimestamp",
                    "parameters": [
                        {
                            "name": "anchor_timestamp",
                            "in": "query",
                            "required": true,
                            "description": "Timestamp in the format %Y-%m-%d %H:%M:%S.%f",
                            "schema": { "type": "string" }
                        },
                        {
                            "name": "user_id",
                            "in": "query",
                            "required": true,
                            "description": "Identifier of a user present in the dataset",
                            "schema": { "type": "string" }
                        },
                        {
                            "name": "log_appearance_limit",
                            "in": "query",
                            "required": true,
                            "description": "Number of logs returned on each side of the anchor log. \
                                With scrolling = 0 a limit larger than the user's log count returns every log.",
                            "schema": { "type": "integer", "minimum": 0 }
                        },
                        {
                            "name": "scrolling",
                            "in": "query",
                            "required": true,
                            "description": "Offset applied to the anchor position. 0 keeps the anchor centered; \
                                a scroll is refused when fewer than log_appearance_limit logs remain in its direction.",
                            "schema": { "type": "integer" }
                        }
                    ],
                    "responses": {
                        "200": { "description": "Window of logs with the remaining scroll budget" },
                        "400": { "description": "Invalid parameter or a combination that cannot be served" }
                    }
                }
            }
        }
    })
}

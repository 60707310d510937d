//! Landing page handler.
//!
//! Serves a fixed HTML document describing the service and its endpoints.
//! No templating: the page has no dynamic data.

use axum::response::Html;

/// The landing page, ported unchanged from the original demo.
const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>POC3 - Java Spring Boot Hello World</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            margin: 0;
            padding: 0;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .container {
            background: white;
            border-radius: 20px;
            padding: 40px;
            box-shadow: 0 20px 40px rgba(0,0,0,0.1);
            text-align: center;
            max-width: 600px;
            margin: 20px;
        }
        .logo { font-size: 3em; margin-bottom: 20px; }
        h1 { color: #333; margin-bottom: 10px; }
        .subtitle { color: #666; margin-bottom: 30px; }
        .tech-stack {
            display: flex;
            justify-content: center;
            gap: 15px;
            margin: 30px 0;
            flex-wrap: wrap;
        }
        .tech-item {
            background: #f0f0f0;
            padding: 10px 20px;
            border-radius: 25px;
            font-size: 14px;
            color: #555;
        }
        .api-info {
            background: #f8f9fa;
            border-radius: 10px;
            padding: 20px;
            margin-top: 30px;
            text-align: left;
        }
        .endpoint {
            background: #e9ecef;
            padding: 8px 12px;
            border-radius: 5px;
            font-family: monospace;
            margin: 5px 0;
            display: block;
        }
        .status {
            display: inline-block;
            background: #28a745;
            color: white;
            padding: 5px 15px;
            border-radius: 15px;
            font-size: 12px;
            margin-top: 10px;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="logo">&#9749;</div>
        <h1>POC3 Hello World</h1>
        <div class="subtitle">Java Spring Boot Application</div>

        <div class="tech-stack">
            <div class="tech-item">Java 17</div>
            <div class="tech-item">Spring Boot</div>
            <div class="tech-item">Maven</div>
            <div class="tech-item">Docker</div>
            <div class="tech-item">AWS ECS</div>
        </div>

        <div class="api-info">
            <h3>&#128279; Available API Endpoints</h3>
            <code class="endpoint">GET /actuator/health - Health check</code>
            <code class="endpoint">GET /api/hello - Hello world message</code>
            <code class="endpoint">GET /api/info - Application information</code>
            <code class="endpoint">GET /actuator - Spring Boot Actuator</code>

            <div style="margin-top: 15px;">
                <strong>&#128274; Security Scanning:</strong> SAST, DAST, SCA Enabled<br>
                <strong>&#128230; Artifacts:</strong> ECR, JFrog, S3<br>
                <strong>&#128640; Deployment:</strong> Octopus Deploy &rarr; AWS ECS
            </div>

            <span class="status">&#9989; Active</span>
        </div>
    </div>
</body>
</html>
"#;

/// Landing page handler.
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_title_and_endpoint_listing() {
        assert!(HOME_PAGE.contains("POC3 Hello World"));
        assert!(HOME_PAGE.contains("GET /actuator/health"));
        assert!(HOME_PAGE.contains("GET /api/hello"));
        assert!(HOME_PAGE.contains("GET /api/info"));
        assert!(HOME_PAGE.contains("GET /actuator"));
    }
}

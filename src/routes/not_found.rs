use worker::*;

pub async fn handler(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    let html = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>404 - Page Not Found</title>
  <style>
    :root {
      --ink: #1f2937;
      --muted: #6b7280;
      --accent: #0969da;
      --bg: #f9fafb;
    }

    * { margin: 0; padding: 0; box-sizing: border-box; }

    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif;
      background: var(--bg);
      color: var(--ink);
      min-height: 100vh;
      display: flex;
      align-items: center;
      justify-content: center;
      padding: 16px;
    }

    .card {
      background: #ffffff;
      border-radius: 8px;
      box-shadow: 0 1px 3px rgba(0,0,0,0.1), 0 1px 2px rgba(0,0,0,0.06);
      max-width: 520px;
      width: 100%;
      padding: clamp(24px, 6vw, 40px);
      text-align: center;
    }

    .code {
      font-size: 15px;
      color: var(--muted);
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 1px;
      margin-bottom: 16px;
    }

    h1 {
      font-size: clamp(22px, 5vw, 28px);
      margin-bottom: 12px;
      letter-spacing: -0.5px;
    }

    p {
      color: var(--muted);
      line-height: 1.7;
      margin-bottom: 24px;
    }

    .cta a {
      display: inline-block;
      padding: 10px 18px;
      border: 2px solid var(--accent);
      border-radius: 8px;
      color: var(--accent);
      text-decoration: none;
      font-weight: 600;
      transition: all 150ms ease;
    }

    .cta a:hover {
      background: var(--accent);
      color: #ffffff;
    }
  </style>
</head>
<body>
  <div class="card">
    <div class="code">404 - Page Not Found</div>
    <h1>That page isn't here</h1>
    <p>Worksheet tools now live in the Content Studio. Old worksheet links are forwarded there automatically; this address matched neither.</p>
    <div class="cta">
      <a href="/teacher/content-studio">Open the Content Studio</a>
    </div>
  </div>
</body>
</html>"#;

    Ok(Response::from_html(html)?.with_status(404))
}

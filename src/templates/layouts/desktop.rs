use maud::{html, Markup, PreEscaped, DOCTYPE};

// Inline stylesheet keeps every page self-contained; there is no static
// asset route to serve.
const STYLES: &str = r#"
  * { box-sizing: border-box; }
  body {
    font-family: system-ui, sans-serif;
    margin: 0;
    color: #1f2937;
    background: #f8fafc;
  }
  header.site-header {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.75rem 1.5rem;
    background: #fff;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
  }
  header.site-header h3 { margin: 0; flex: 1; }
  header.site-header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
  header.site-header nav a { color: #2563eb; text-decoration: none; }
  main.container { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
  .card {
    background: #fff;
    border: 1px solid #e5e7eb;
    border-radius: 8px;
    padding: 1rem 1.25rem;
    margin-bottom: 1.5rem;
  }
  .card h2 { margin-top: 0; font-size: 1.1rem; }
  .tiles { display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 1.5rem; }
  .tile {
    background: #fff;
    border: 1px solid #e5e7eb;
    border-radius: 8px;
    padding: 0.75rem 1.25rem;
    min-width: 9rem;
    display: flex;
    flex-direction: column;
  }
  .tile-value { font-size: 1.6rem; font-weight: 700; }
  .tile-label { font-size: 0.85rem; color: #6b7280; }
  table { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
  th, td { text-align: left; padding: 0.4rem 0.6rem; border-bottom: 1px solid #e5e7eb; }
  th { color: #6b7280; font-weight: 600; text-transform: uppercase; font-size: 0.75rem; }
  details.category { margin-bottom: 1rem; }
  details.category summary { cursor: pointer; padding: 0.5rem 0; }
  .muted { color: #6b7280; font-size: 0.9rem; }
  .actions { display: flex; gap: 0.75rem; margin-top: 1rem; }
  button {
    background: #2563eb;
    color: #fff;
    border: none;
    border-radius: 6px;
    padding: 0.5rem 1.1rem;
    font-size: 0.95rem;
    cursor: pointer;
  }
  button.secondary { background: #10b981; }
  input[type="file"] { display: block; margin-top: 0.5rem; }
  .chart-label { font-size: 0.85rem; fill: #1f2937; }
  .chart-count { font-size: 0.85rem; fill: #6b7280; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header class="site-header" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M9 5h-2a2 2 0 0 0 -2 2v12a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-12a2 2 0 0 0 -2 -2h-2" {}
                        path d="M9 3m0 2a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v0a2 2 0 0 1 -2 2h-2a2 2 0 0 1 -2 -2z" {}
                        path d="M9 14l2 2l4 -4" {}
                    }
                    h3 { "Attendance Report" }
                    nav {
                        ul {
                            li { a href="/" { "Upload" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

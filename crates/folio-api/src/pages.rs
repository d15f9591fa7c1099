use axum::response::Html;

use folio_types::models::{PROJECTS, Project};

/// GET /
pub async fn home() -> Html<String> {
    Html(layout(
        "Home",
        "<section class=\"hero\">\
         <h1>Hi, welcome to my portfolio</h1>\
         <p>Software, design and the things I am learning along the way.</p>\
         <a class=\"button\" href=\"/projects\">See my projects</a>\
         </section>",
    ))
}

/// GET /projects
pub async fn projects() -> Html<String> {
    Html(render_projects(&PROJECTS))
}

/// GET /contact
pub async fn contact_form() -> Html<String> {
    Html(layout(
        "Contact",
        "<h1>Contact me</h1>\
         <form method=\"post\" action=\"/contact\">\
         <label for=\"name\">Name</label>\
         <input id=\"name\" name=\"name\" type=\"text\" required>\
         <label for=\"email\">Email</label>\
         <input id=\"email\" name=\"email\" type=\"email\" required>\
         <label for=\"message\">Message</label>\
         <textarea id=\"message\" name=\"message\" rows=\"6\" required></textarea>\
         <button type=\"submit\">Send</button>\
         </form>",
    ))
}

fn render_projects(projects: &[Project]) -> String {
    let mut body = String::from("<h1>Projects</h1><ul class=\"projects\">");
    for project in projects {
        body.push_str(&format!(
            "<li><h2>{}</h2><p>{}</p></li>",
            escape_html(project.name),
            escape_html(project.description)
        ));
    }
    body.push_str("</ul>");
    layout("Projects", &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{} | Portfolio</title>\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\
         </head>\
         <body>\
         <nav><a href=\"/\">Home</a> <a href=\"/projects\">Projects</a> <a href=\"/contact\">Contact</a></nav>\
         <main>{}</main>\
         <script src=\"/static/script.js\"></script>\
         </body>\
         </html>",
        escape_html(title),
        body
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

//! `folio projects`: tabular project listing.

use comfy_table::{ContentArrangement, Table};
use folio_core::content::{LinkKind, LinkTarget, Portfolio, Project};

pub fn list(portfolio: &Portfolio) {
    if portfolio.projects.is_empty() {
        println!("No projects.");
        return;
    }
    println!("{}", render_table(portfolio));
}

fn render_table(portfolio: &Portfolio) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Title", "Tags", "View", "Code"]);
    for (i, project) in portfolio.projects.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            project.title.clone(),
            project.tags.join(", "),
            link_status(project, LinkKind::Live),
            link_status(project, LinkKind::Source),
        ]);
    }
    table
}

fn link_status(project: &Project, kind: LinkKind) -> String {
    match project.link_target(kind) {
        LinkTarget::Open(url) => url.to_string(),
        LinkTarget::Inert(reason) => format!("inert: {reason}"),
    }
}

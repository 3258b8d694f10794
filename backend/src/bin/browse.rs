//! Terminal client for the user directory.
//!
//! Mirrors the browser list page's data flow: fetch the full record set
//! once, then filter, sort, and paginate locally through `listview`.
//!
//! ```text
//! browse --base-url http://127.0.0.1:8080 --search ada --status active \
//!        --sort name --desc --page 2
//! ```

use std::num::NonZeroUsize;

use clap::Parser;
use listview::{SortDirection, SortKey, StatusFilter, ViewState};

use backend::domain::UserRecord;

#[derive(Debug, Parser)]
#[command(name = "browse", about = "Browse the user directory from the terminal")]
struct Args {
    /// Base URL of the backend.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    base_url: String,

    /// Keep records whose name contains this text (case-insensitive).
    #[arg(long, default_value = "")]
    search: String,

    /// Status filter: all, active, or inactive.
    #[arg(long, default_value = "all")]
    status: StatusFilter,

    /// Sort column: id or name.
    #[arg(long, default_value = "id")]
    sort: SortKey,

    /// Sort descending instead of ascending.
    #[arg(long)]
    desc: bool,

    /// Page to display, starting at 1.
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Records per page.
    #[arg(long, default_value_t = listview::DEFAULT_PAGE_SIZE)]
    page_size: NonZeroUsize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let users: Vec<UserRecord> = reqwest::get(format!("{}/users", args.base_url))
        .await?
        .error_for_status()?
        .json()
        .await?;

    let mut view = ViewState::new(args.page_size);
    view.set_search_text(args.search);
    view.set_status_filter(args.status);
    view.set_sort(
        args.sort,
        if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    );
    view.set_page(args.page);

    let page = view.derive(&users);
    println!(
        "{:>4}  {:<24} {:<30} {:<16} {:<14} {}",
        "ID", "NAME", "EMAIL", "PHONE", "DEPARTMENT", "STATUS"
    );
    for user in &page.items {
        println!(
            "{:>4}  {:<24} {:<30} {:<16} {:<14} {}",
            user.id.get(),
            user.name.as_ref(),
            user.email.as_ref(),
            user.phone.as_ref(),
            user.department.as_ref(),
            if user.active { "active" } else { "inactive" }
        );
    }
    println!(
        "page {} of {} ({} matching)",
        view.page_number(),
        page.display_total_pages(),
        page.total_filtered
    );

    Ok(())
}

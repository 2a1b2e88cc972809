//! Plain-text rendering of command results.
//!
//! Renderers write straight into an [`io::Write`], so a navigation bar for a
//! listing with billions of pages streams out instead of being built in
//! memory first. `--json` output bypasses this module and serializes the
//! results with serde.

use std::io::{self, Write};

use blueprintapp::commands::profile::ProfileListing;
use blueprintapp::pagination::Page;
use blueprintapp::tags::NormalizedTags;
use blueprintapp::video::VideoEmbed;

/// Width of the relative-time column in profile listings.
pub const SINCE_WIDTH: usize = 16;

pub fn render_tags(out: &mut dyn Write, tags: &NormalizedTags) -> io::Result<()> {
    for t in &tags.tags {
        let marker = if tags.created.contains(t) { " (new)" } else { "" };
        writeln!(out, "{}\t{}\t{}{}", t.id, t.slug, t.name, marker)?;
    }
    Ok(())
}

pub fn render_video(out: &mut dyn Write, video: &VideoEmbed) -> io::Result<()> {
    writeln!(out, "{}\t{}", video.provider, video.embed_url)
}

/// `« Previous page | 1 [2] 3 | Next page »`, without the trailing newline.
pub fn render_navigation(out: &mut dyn Write, page: &Page) -> io::Result<()> {
    if page.has_previous() {
        write!(out, "« Previous page | ")?;
    }
    for link in page.links() {
        if link.number > 1 {
            write!(out, " ")?;
        }
        if link.is_current {
            write!(out, "[{}]", link.number)?;
        } else {
            write!(out, "{}", link.number)?;
        }
    }
    if page.has_next() {
        write!(out, " | Next page »")?;
    }
    Ok(())
}

pub fn render_page(out: &mut dyn Write, page: &Page) -> io::Result<()> {
    writeln!(out, "page {} of {}", page.current_page, page.page_count)?;
    writeln!(out, "offset {} limit {}", page.offset, page.limit)?;
    if page.out_of_range {
        writeln!(out, "requested page was out of range")?;
    }
    render_navigation(out, page)?;
    writeln!(out)
}

pub fn render_profile(out: &mut dyn Write, listing: &ProfileListing) -> io::Result<()> {
    writeln!(
        out,
        "{} (page {} of {})",
        listing.user.username, listing.page.current_page, listing.page.page_count
    )?;

    if listing.rows.is_empty() {
        writeln!(out, "No blueprints for the moment")?;
    }

    for row in &listing.rows {
        write!(
            out,
            "{:>width$}  {}  {}",
            row.since,
            row.title,
            row.url,
            width = SINCE_WIDTH
        )?;
        if listing.is_owner {
            write!(out, "  [{}]", row.exposure)?;
        }
        writeln!(out)?;
    }

    render_navigation(out, &listing.page)?;
    writeln!(out)
}

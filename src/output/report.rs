use crate::crawler::CrawlReport;
use reqwest::Client;
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Width of the separator printed after each robots.txt body
const SEPARATOR_WIDTH: usize = 50;

/// Writes the list of discovered robots.txt files
///
/// # Example output
///
/// ```text
/// --- RESULTS ---
/// Found 2 robots.txt files:
/// - http://blog.example.com/robots.txt
/// - http://example.com/robots.txt
/// ```
pub fn write_results<W: Write>(out: &mut W, report: &CrawlReport) -> io::Result<()> {
    writeln!(out, "\n--- RESULTS ---")?;

    if report.robots_found.is_empty() {
        writeln!(out, "No robots.txt files found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Found {} robots.txt files:",
        report.robots_found.len()
    )?;
    for url in &report.robots_found {
        writeln!(out, "- {}", url)?;
    }

    Ok(())
}

/// Writes the closing totals line, with a per-depth breakdown when there is one
pub fn write_crawl_totals<W: Write>(out: &mut W, report: &CrawlReport) -> io::Result<()> {
    writeln!(out, "\nCrawled {} URLs in total.", report.visited_count())?;

    for stats in &report.depths {
        writeln!(
            out,
            "  depth {}: {} queued, {} dispatched, {} new URLs found",
            stats.depth, stats.frontier, stats.dispatched, stats.discovered
        )?;
    }

    Ok(())
}

/// Asks a yes/no question and reads one line of input
///
/// Any answer starting with `y` or `Y` is a yes. End of input is a no.
pub async fn confirm<W, R>(out: &mut W, input: &mut R, question: &str) -> io::Result<bool>
where
    W: Write,
    R: AsyncBufRead + Unpin,
{
    writeln!(out, "\n{} (y/n)", question)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer).await?;

    Ok(answer.trim().to_lowercase().starts_with('y'))
}

/// Fetches each robots.txt once and writes its raw content
///
/// Fetch errors are written in place of the content and do not stop the loop.
pub async fn write_robots_contents<W: Write>(
    out: &mut W,
    client: &Client,
    urls: &[String],
    timeout: Duration,
) -> io::Result<()> {
    for url in urls {
        writeln!(out, "\n=== Content of {} ===", url)?;

        let body = match client.get(url).timeout(timeout).send().await {
            Ok(response) => response.text().await,
            Err(e) => Err(e),
        };

        match body {
            Ok(text) => {
                writeln!(out, "{}", text)?;
                writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
            }
            Err(e) => writeln!(out, "Error retrieving content: {}", e)?,
        }
    }

    Ok(())
}

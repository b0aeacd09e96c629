use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use subsnap::{
    init_tracing_once, normalize_subreddit, Credentials, RedditClient, SortOrder,
    SubredditSnapshot,
};

#[derive(Parser)]
#[command(name = "subsnap")]
#[command(about = "Snapshot a subreddit's posts and top comments to a timestamped JSON file")]
struct Args {
    /// Subreddit name (without r/); prompted for when omitted
    #[arg(short, long)]
    subreddit: Option<String>,

    /// Listing order: best, new, top, rising or hot; prompted for when omitted
    #[arg(long)]
    sort: Option<SortOrder>,

    /// Number of posts to fetch
    #[arg(long, default_value_t = 10)]
    limit: u32,

    /// Output directory for the snapshot file
    #[arg(long, default_value = "reddit_outputs")]
    out_dir: PathBuf,

    /// Disable the progress bar
    #[arg(long)]
    quiet: bool,
}

fn main() {
    // One catch site: report the failure and end the run normally.
    if let Err(e) = run() {
        eprintln!("⚠️ Error: {e:#}");
    }
}

fn run() -> Result<()> {
    init_tracing_once();
    let args = Args::parse();

    let creds = Credentials::from_env()?;

    let subreddit = match &args.subreddit {
        Some(s) => normalize_subreddit(s),
        None => prompt_subreddit()?,
    };
    let sort = match args.sort {
        Some(s) => s,
        None => prompt_sort()?,
    };

    let client = RedditClient::authenticate(&creds)?;

    let snapshot = SubredditSnapshot::new()
        .limit(args.limit)
        .out_dir(&args.out_dir)
        .progress(!args.quiet)
        .progress_label(format!("r/{subreddit}"));

    let records = snapshot.fetch(&client, &subreddit, sort)?;
    let path = snapshot.save(&records)?;

    println!("\n✅ Done! {} posts saved to '{}'.", records.len(), path.display());
    Ok(())
}

fn prompt_subreddit() -> Result<String> {
    print!("Enter a subreddit name (without r/): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(normalize_subreddit(&line))
}

fn prompt_sort() -> Result<SortOrder> {
    println!("\nChoose a sort method:");
    for (n, sort) in SortOrder::MENU {
        println!("{n}. {}", sort.label());
    }
    print!("Enter a number (1-5): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    // Non-numeric input falls back the same way an out-of-range pick does.
    let choice = line.trim().parse::<u32>().unwrap_or(0);
    Ok(SortOrder::from_menu_choice(choice))
}

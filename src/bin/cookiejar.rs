//! cookiejar
//!
//! Set, evict or print cookies in a Netscape HTTP cookie file.

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use cookiejar::base::config::{JarConfig, OverflowPolicy, MAX_RECORDS};
use cookiejar::cookies::jar::CookieJar;
use cookiejar::cookies::matcher::CookiePattern;
use cookiejar::cookies::{persistence, setcookie};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(name = "cookiejar", version)]
#[command(about = "Maintain a Netscape HTTP cookie file")]
#[command(
    override_usage = "cookiejar <Set-Cookie header> <COOKIE_FILE>\n       \
                      cookiejar --evict <NAME> <DOMAIN> <PATH> <COOKIE_FILE>\n       \
                      cookiejar --json <COOKIE_FILE>"
)]
struct Args {
    /// Delete cookies matching NAME DOMAIN PATH; each may be `*`
    #[arg(
        short = 'e',
        long,
        num_args = 3,
        value_names = ["NAME", "DOMAIN", "PATH"],
        conflicts_with = "json"
    )]
    evict: Option<Vec<String>>,

    /// Print the cookies as a null-terminated JSON array of cookie objects to stdout
    #[arg(short = 'j', long)]
    json: bool,

    /// Maximum number of lines (cookies and comments) in the cookie file
    #[arg(long, default_value_t = MAX_RECORDS)]
    max_records: usize,

    /// Drop lines past --max-records when loading instead of failing
    #[arg(long)]
    truncate: bool,

    /// Optional Set-Cookie header, then the cookie file
    #[arg(value_name = "ARGS", required = true, num_args = 1..=2)]
    args: Vec<String>,
}

enum Action {
    Set(String),
    Evict(Vec<String>),
    Json,
}

impl Args {
    fn action(self) -> anyhow::Result<(Action, PathBuf, JarConfig)> {
        let overflow = if self.truncate {
            OverflowPolicy::Truncate
        } else {
            OverflowPolicy::Reject
        };
        let config = JarConfig::new()
            .max_records(self.max_records)
            .overflow(overflow);

        let mut args = self.args;
        let path = PathBuf::from(args.pop().unwrap_or_default());

        let action = match (self.json, self.evict, args.pop()) {
            (true, None, None) => Action::Json,
            (false, Some(pattern), None) => Action::Evict(pattern),
            (false, None, Some(header)) => Action::Set(header),
            (false, None, None) => bail!("expected a Set-Cookie header, --evict or --json"),
            (_, _, Some(extra)) => bail!("unexpected argument '{extra}'"),
            (true, Some(_), None) => bail!("--json and --evict cannot be combined"),
        };

        Ok((action, path, config))
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let (action, path, config) = args.action()?;

    // The header is checked before the cookie file is touched.
    let candidate = match &action {
        Action::Set(header) => {
            let parsed =
                setcookie::parse_set_cookie(header).map_err(|e| anyhow!("Set-Cookie: {e}"))?;
            if parsed.expires_overridden {
                warn!("Expires ignored in favor of Max-Age");
            }
            for extension in &parsed.extensions {
                debug!(directive = %extension, "directive is not supported");
            }
            Some(parsed.cookie)
        }
        _ => None,
    };

    let buf = persistence::load(&path).context("could not load cookie file")?;
    let mut jar = CookieJar::parse(&buf, config).context("could not load cookie file")?;

    match &action {
        Action::Json => {
            let json = jar.to_json()?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|()| stdout.flush())
                .context("could not print JSON")?;
            return Ok(());
        }
        Action::Set(_) => {
            if let Some(cookie) = candidate {
                jar.upsert(cookie)?;
            }
        }
        Action::Evict(pattern) => {
            let pattern = CookiePattern::new(&pattern[0], &pattern[1], &pattern[2]);
            if jar.evict_all(&pattern) == 0 {
                debug!("no cookies matched");
            }
        }
    }

    persistence::commit(&path, &jar.to_netscape()).context("could not write cookie file")?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

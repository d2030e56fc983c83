use claimlens::config::ClientConfig;
use claimlens::rationale;
use claimlens::render::{render_result, RenderContext};
use claimlens::report;
use claimlens::service::HttpAnalysisService;
use claimlens::session::{AnalysisSession, SessionState, SubmitOutcome};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

struct CliArgs {
    report_path: Option<PathBuf>,
    input: String,
}

fn parse_args(args: Vec<String>) -> CliArgs {
    let mut report_path = None;
    let mut words = Vec::new();
    let mut iter = args.into_iter().peekable();
    while let Some(arg) = iter.next() {
        if arg == "--report" {
            // An explicit target must look like a PDF path; otherwise
            // the next word belongs to the claim.
            let explicit = matches!(iter.peek(), Some(next) if next.ends_with(".pdf"));
            report_path = Some(if explicit {
                PathBuf::from(iter.next().unwrap())
            } else {
                PathBuf::from(report::DEFAULT_REPORT_FILENAME)
            });
        } else {
            words.push(arg);
        }
    }
    CliArgs {
        report_path,
        input: words.join(" "),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    env_logger::init();

    let args = parse_args(env::args().skip(1).collect());
    if args.input.trim().is_empty() {
        eprintln!("usage: claimlens [--report [PATH.pdf]] <claim or URL>");
        return Ok(ExitCode::from(2));
    }

    let config = ClientConfig::from_env()?;
    let ctx = RenderContext::new(config.theme);
    let service = HttpAnalysisService::new(&config)?;
    let mut session = AnalysisSession::new(service);

    match session.submit(&args.input).await {
        SubmitOutcome::Rejected | SubmitOutcome::Ignored => {
            eprintln!("{}", session.error().unwrap_or("nothing to analyze"));
            return Ok(ExitCode::from(2));
        }
        SubmitOutcome::Completed => {}
    }

    match session.state() {
        SessionState::Resolved => {
            let result = session.result().expect("resolved session has a result");
            let explanation = rationale::explain(result);
            print!("{}", render_result(&ctx, result, &explanation));
            if let Some(path) = args.report_path {
                report::save(result, &path)?;
                println!("\nReport saved to {}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            eprintln!(
                "analysis failed: {}",
                session.error().unwrap_or("unknown error")
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

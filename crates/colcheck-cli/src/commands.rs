use std::io;

use anyhow::Result;

use colcheck_cli::prompt::RetryPolicy;
use colcheck_cli::report::ReportFormat;
use colcheck_cli::session::{SessionOptions, SessionOutcome, run_session};

use crate::cli::{Cli, ReportFormatArg};

pub fn run_check(cli: &Cli) -> Result<SessionOutcome> {
    let options = SessionOptions {
        model: cli.model.clone(),
        new: cli.new.clone(),
        delimiter: cli.delimiter,
        retry: RetryPolicy::from(cli.max_attempts),
        format: report_format(cli.format),
    };
    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    // Keep stdout parseable when it carries a JSON document.
    if options.format == ReportFormat::Json {
        run_session(&options, &mut input, &mut io::stderr(), &mut output)
    } else {
        run_session(&options, &mut input, &mut io::stdout(), &mut output)
    }
}

fn report_format(format: ReportFormatArg) -> ReportFormat {
    match format {
        ReportFormatArg::Text => ReportFormat::Text,
        ReportFormatArg::Table => ReportFormat::Table,
        ReportFormatArg::Json => ReportFormat::Json,
    }
}

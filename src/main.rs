use std::env;

use anyhow::Result;

use feriados_ical::{cli, run, summary, Source};

fn setup_logging() {
    let filters =
        env::var("LOG").unwrap_or_else(|_| "warn,feriados_ical=info,feriados_parser=info".into());

    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    let outcome = run(Source::new(args.timeout), args.year, &args.output).await?;

    print!("{}", summary(&outcome.holidays, args.year));

    Ok(())
}

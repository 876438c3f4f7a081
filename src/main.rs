use std::env;
use std::process::ExitCode;

use sunside::TripPlanner;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(start), Some(end), Some(departure)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("usage: sunside <start> <end> <departure>");
        eprintln!("example: sunside Hamburg Munich 2026-08-07T08:30:00+02:00");
        return ExitCode::from(2);
    };

    match run(&start, &end, &departure).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(start: &str, end: &str, departure: &str) -> Result<(), Box<dyn std::error::Error>> {
    let planner = TripPlanner::builder().build()?;
    let report = planner.plan_trip(start, end, departure).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

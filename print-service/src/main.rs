use std::process::ExitCode;

use print_service::{ApiResponse, AppError, PrintRequest, build_service, setup_environment};

const USAGE: &str = "usage: print-service <request.json> [--preview]";

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut path = None;
    let mut preview = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--preview" => preview = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(ExitCode::SUCCESS);
            }
            _ if path.is_none() => path = Some(arg),
            _ => return Err(USAGE.into()),
        }
    }
    let Some(path) = path else {
        return Err(USAGE.into());
    };

    let config = setup_environment();
    tracing::info!(spool_dir = %config.spool_dir, preview, "Print service starting");

    let raw = std::fs::read_to_string(&path)?;
    let request: PrintRequest = serde_json::from_str(&raw)?;
    let service = build_service(&config)?;

    let (succeeded, output) = if preview {
        respond(service.preview(request.document_type, &request.data))?
    } else {
        let result = match request.options() {
            Ok(options) => service.print(request.document_type, request.data, options).await,
            Err(e) => Err(e),
        };
        respond(result)?
    };
    println!("{}", output);
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Response envelope as JSON, paired with whether the request succeeded
fn respond<T: serde::Serialize>(result: Result<T, AppError>) -> serde_json::Result<(bool, String)> {
    match result {
        Ok(data) => Ok((true, serde_json::to_string_pretty(&ApiResponse::success(data))?)),
        Err(e) => {
            tracing::error!(code = e.code.code(), error = %e, "Print request failed");
            Ok((false, serde_json::to_string_pretty(&ApiResponse::<()>::error(&e))?))
        }
    }
}

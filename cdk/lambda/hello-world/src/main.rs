//! Lambda function behind the API Gateway proxy integration.

use lambda_runtime::{Error, LambdaEvent, service_fn};

use hello_world_api::event::{InboundRequest, OutboundResponse};
use hello_world_api::handler::handle;

async fn function_handler(
    event: LambdaEvent<InboundRequest>,
) -> Result<OutboundResponse, Error> {
    let (request, _context) = event.into_parts();
    Ok(handle(&request))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    lambda_runtime::run(service_fn(function_handler)).await
}

// Lambda bootstrap entry point for the submission API

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    quizgram::setup_logging();

    run(service_fn(quizgram::api::handler)).await
}

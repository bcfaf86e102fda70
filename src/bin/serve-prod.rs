//! Production launcher: `127.0.0.1:8000`, info logging.

use farm_stack_basic::config::Profile;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    farm_stack_basic::lifecycle::launch(Profile::Prod).await
}

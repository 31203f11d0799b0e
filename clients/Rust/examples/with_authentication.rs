use decision_calc_sdk::{DecisionCalcClient, DecisionCalcError, QueueRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Talk to a server started with API_KEY=demo-secret
    let client = DecisionCalcClient::new("http://127.0.0.1:9000")?.with_api_key("demo-secret");

    match client.solve_queue(QueueRequest::new(5.0, 8.0)).await {
        Ok(queue) => println!("✓ Authenticated: ρ = {:.3}, L = {:.3}", queue.rho, queue.l),
        Err(DecisionCalcError::AuthenticationFailed) => {
            println!("✗ Key rejected; check the server's API_KEY")
        }
        Err(e) => println!("✗ Request failed: {}", e),
    }

    Ok(())
}

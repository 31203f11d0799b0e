use decision_calc_sdk::{
    BepRequest, DecisionCalcClient, EoqRequest, LpRequestBuilder, QueueRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a client (adjust URL as needed)
    let client = DecisionCalcClient::new("http://127.0.0.1:9000")?;

    // Check if the server is healthy
    match client.health_check().await {
        Ok(true) => println!("✓ Server is healthy"),
        Ok(false) => println!("⚠ Server returned non-success status"),
        Err(e) => println!("✗ Health check failed: {}", e),
    }

    // Linear program:
    //   maximize 3x + 5y
    //   subject to x + 2y ≤ 6, 3x + 2y ≤ 12
    let request = LpRequestBuilder::new()
        .objective(3.0, 5.0)
        .constraint(1.0, 2.0, 6.0)
        .constraint(3.0, 2.0, 12.0)
        .build()?;
    let solution = client.solve_lp(request).await?;
    println!(
        "LP optimum: x = {}, y = {}, Z = {}",
        solution.x, solution.y, solution.z
    );

    // Economic order quantity: D = 1000, S = 50, H = 2
    let eoq = client.solve_eoq(EoqRequest::new(1000.0, 50.0, 2.0)).await?;
    println!(
        "EOQ: {:.2} units ({} cost-curve points)",
        eoq.eoq,
        eoq.cost_curve.x.len()
    );

    // M/M/1 queue: λ = 5, μ = 8
    let queue = client.solve_queue(QueueRequest::new(5.0, 8.0)).await?;
    println!(
        "Queue: ρ = {:.3}, L = {:.3}, Lq = {:.3}, W = {:.3}, Wq = {:.3}",
        queue.rho, queue.l, queue.lq, queue.w, queue.wq
    );

    // Break-even: FC = 10000, VC = 50, P = 100
    let bep = client
        .solve_bep(BepRequest::new(10000.0, 50.0, 100.0))
        .await?;
    println!(
        "Break-even: {:.2} units, revenue {:.2}",
        bep.break_even_units, bep.break_even_revenue
    );

    Ok(())
}

// storefront_cart/examples/plan_basics.rs

use storefront_cart::{CartError, CartResult, Plan, PlanOutcome, StateData, StepControl};
use tracing::info;

#[derive(Debug, Default)]
struct Checkout {
  log: Vec<String>,
  subtotal: f64,
  express: bool,
}

#[tokio::main]
async fn main() -> CartResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Plan Basics Example ---");

  let mut plan = Plan::<Checkout>::new(
    "checkout",
    &[("price_items", None), ("add_express_fee", None), ("finish", None)],
  );

  plan.on("price_items", |data: StateData<Checkout>| async move {
    let mut guard = data.write();
    guard.subtotal = 2.0 * 25.0 + 10.0;
    let msg = format!("Priced items: {:.2}", guard.subtotal);
    info!("{}", msg);
    guard.log.push(msg);
    Ok::<_, CartError>(StepControl::Continue)
  });

  plan.set_skip_condition(
    "add_express_fee",
    Some(std::sync::Arc::new(|data: StateData<Checkout>| !data.read().express)),
  );
  plan.on("add_express_fee", |data: StateData<Checkout>| async move {
    let mut guard = data.write();
    guard.subtotal += 9.5;
    guard.log.push("Added express fee".to_string());
    Ok::<_, CartError>(StepControl::Continue)
  });

  plan.on("finish", |data: StateData<Checkout>| async move {
    let mut guard = data.write();
    let msg = format!("Total due: {:.2}", guard.subtotal);
    guard.log.push(msg);
    Ok::<_, CartError>(StepControl::Stop)
  });

  let data = StateData::new(Checkout::default());
  let outcome = plan.run(data.clone()).await?;

  info!(?outcome, "Plan finished.");
  assert_eq!(outcome, PlanOutcome::Stopped);
  for line in &data.read().log {
    info!("  {}", line);
  }
  Ok(())
}

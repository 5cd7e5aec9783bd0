use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parking_lot::Mutex;
use std::sync::Arc;
use storefront_cart::{
  AddToCartRequest, CartApi, CartError, CartResult, CartStore, Plan, ProductRef, ServerCart, ServerLine, ServerProduct, StateData,
  StepControl,
};
use tokio::runtime::Runtime;

// --- In-memory cart service ---

/// Answers instantly from a cart kept in memory; the numbers measure the
/// store and plan overhead only.
#[derive(Default)]
struct MemoryApi {
  cart: Mutex<ServerCart>,
  next_line: Mutex<u64>,
}

impl MemoryApi {
  fn with_lines(count: usize) -> Arc<Self> {
    let api = Self::default();
    {
      let mut cart = api.cart.lock();
      for i in 0..count {
        cart.items.push(bench_line(&format!("L{}", i), &format!("P{}", i % 7), 1 + (i % 3) as u32));
      }
    }
    *api.next_line.lock() = count as u64;
    Arc::new(api)
  }
}

fn bench_line(line_id: &str, product_id: &str, quantity: u32) -> ServerLine {
  ServerLine {
    id: line_id.to_string(),
    product: Some(ProductRef::Populated(ServerProduct {
      id: product_id.to_string(),
      name: format!("Product {}", product_id),
      price: 19.99,
      image: None,
      description: None,
      category: Some("bench".to_string()),
    })),
    quantity,
    selected_size: None,
    selected_color: None,
  }
}

#[async_trait]
impl CartApi for MemoryApi {
  async fn get_cart(&self) -> CartResult<ServerCart> {
    Ok(self.cart.lock().clone())
  }

  async fn add_to_cart(&self, request: &AddToCartRequest) -> CartResult<ServerCart> {
    let line_id = {
      let mut next = self.next_line.lock();
      *next += 1;
      format!("L{}", *next)
    };
    let mut cart = self.cart.lock();
    cart.items.push(bench_line(&line_id, &request.product_id, request.quantity));
    Ok(cart.clone())
  }

  async fn delete_line(&self, line_id: &str) -> CartResult<ServerCart> {
    let mut cart = self.cart.lock();
    let before = cart.items.len();
    cart.items.retain(|line| line.id != line_id);
    if cart.items.len() == before {
      return Err(CartError::NotFound(format!("line {}", line_id)));
    }
    Ok(cart.clone())
  }
}

// --- Benchmark Functions ---

fn bench_plan_overhead(c: &mut Criterion) {
  let mut group = c.benchmark_group("PlanRun");
  let rt = Runtime::new().expect("tokio runtime");

  for num_steps in [1usize, 10, 50] {
    let names: Vec<String> = (0..num_steps).map(|i| format!("step_{}", i)).collect();
    let mut plan = Plan::<u64>::from_step_names("bench", names.clone());
    for name in &names {
      plan.on(name, |data: StateData<u64>| async move {
        *data.write() += 1;
        Ok::<_, CartError>(StepControl::Continue)
      });
    }

    group.throughput(Throughput::Elements(num_steps as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_steps), &plan, |b, plan| {
      b.to_async(&rt).iter(|| async {
        let data = StateData::new(0u64);
        plan.run(data).await.expect("plan failed");
      });
    });
  }
  group.finish();
}

fn bench_load_and_derived_reads(c: &mut Criterion) {
  let mut group = c.benchmark_group("LoadAndRead");
  let rt = Runtime::new().expect("tokio runtime");

  for num_lines in [10usize, 100, 1000] {
    let api = MemoryApi::with_lines(num_lines);
    group.throughput(Throughput::Elements(num_lines as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_lines), &api, |b, api| {
      b.to_async(&rt).iter(|| async {
        let store = CartStore::new(api.clone());
        store.load().await;
        criterion::black_box((store.cart_total(), store.cart_items_count(), store.is_in_cart("P3")));
      });
    });
  }
  group.finish();
}

fn bench_clear_cart(c: &mut Criterion) {
  let mut group = c.benchmark_group("ClearCart");
  let rt = Runtime::new().expect("tokio runtime");

  for num_lines in [5usize, 50] {
    group.throughput(Throughput::Elements(num_lines as u64));
    group.bench_function(BenchmarkId::from_parameter(num_lines), |b| {
      b.to_async(&rt).iter(|| async move {
        let store = CartStore::new(MemoryApi::with_lines(num_lines));
        store.load().await;
        store.clear_cart(None).await;
        criterion::black_box(store.cart_items_count());
      });
    });
  }
  group.finish();
}

criterion_group!(benches, bench_plan_overhead, bench_load_and_derived_reads, bench_clear_cart);
criterion_main!(benches);

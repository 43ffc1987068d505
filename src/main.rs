#[cfg(any(target_arch = "wasm32", test))]
mod sections;
#[cfg(any(target_arch = "wasm32", test))]
mod theme;
#[cfg(any(target_arch = "wasm32", test))]
mod typing;

#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}

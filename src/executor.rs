//! Bounded worker pool for parallel driver work (e.g. chunk downloads).

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::runtime::{Builder, Runtime};

use crate::error::{Error, Result};

/// Build a multi-thread runtime with `parallel` workers named `{prefix}1`, `{prefix}2`, ...
///
/// Returns `Err(Error::InvalidConfig)` when `parallel` is zero.
pub fn create_default_executor(thread_name_prefix: &str, parallel: usize) -> Result<Runtime> {
    if parallel == 0 {
        return Err(Error::invalid_config("parallel", "0"));
    }

    let prefix = thread_name_prefix.to_string();
    let thread_count = AtomicUsize::new(1);

    let runtime = Builder::new_multi_thread()
        .worker_threads(parallel)
        .thread_name_fn(move || {
            let n = thread_count.fetch_add(1, Ordering::Relaxed);
            format!("{}{}", prefix, n)
        })
        .enable_all()
        .build()?;

    Ok(runtime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_threads_are_named() {
        let runtime = create_default_executor("result-chunk-", 2).unwrap();

        let names = runtime.block_on(async {
            let mut names = Vec::new();
            for _ in 0..4 {
                let name = tokio::spawn(async { std::thread::current().name().map(String::from) })
                    .await
                    .unwrap();
                names.push(name);
            }
            names
        });

        for name in names {
            let name = name.expect("worker threads are named");
            assert!(name.starts_with("result-chunk-"), "unexpected name {}", name);
        }
    }

    #[test]
    fn test_zero_parallelism_rejected() {
        assert!(matches!(
            create_default_executor("w-", 0),
            Err(Error::InvalidConfig { .. })
        ));
    }
}

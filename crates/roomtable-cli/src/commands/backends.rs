//! Backend listing command implementation.

use crate::error::Result;
use roomtable_llm::BackendRegistry;

/// Execute the backends command: print the configured backend table.
pub fn execute_backends() -> Result<()> {
    let registry = BackendRegistry::default();

    println!("{:<24} {:<12} {:<28} {:>14}", "BACKEND", "DRIVER", "MODEL", "CONTEXT LIMIT");
    for (id, spec) in registry.iter() {
        println!(
            "{:<24} {:<12} {:<28} {:>14}",
            id, spec.driver, spec.model, spec.context_limit
        );
    }

    Ok(())
}

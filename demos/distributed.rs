use flexid::{FlexId, FlexIdConfig, MachineIdStrategy};

fn main() {
    let config = FlexIdConfig::default();

    // Each strategy resolves the machine ID once, at construction.
    // Distinct machine IDs across a fleet are the deployment's job; the
    // generator only validates the range.
    let strategies = [
        ("explicit", MachineIdStrategy::Explicit(7)),
        ("env", MachineIdStrategy::Env("FLEXID_MACHINE_ID".to_string())),
        ("network", MachineIdStrategy::Network),
        ("random", MachineIdStrategy::Random),
    ];

    for (name, strategy) in strategies {
        match FlexId::from_strategy(strategy, config) {
            Ok(mut generator) => {
                let id = generator.next_id();
                println!(
                    "{name:>8}: machine ID {} -> {}",
                    generator.machine_id,
                    generator.encode(id)
                );
            }
            Err(err) => println!("{name:>8}: unavailable ({err})"),
        }
    }
}

use flexid::{Base, FlexId, FlexIdConfig};

fn main() {
    // Shift bits away from the random field toward machine ID and sequence,
    // render text in Crockford base32, and mask the timestamp
    let config = FlexIdConfig::builder()
        .timestamp_bits(44)
        .unwrap()
        .machine_id_bits(16)
        .unwrap()
        .entropy_bits(0)
        .unwrap()
        .random_bits(4)
        .unwrap()
        .sequence_bits(14)
        .unwrap()
        .epoch(1640995200000) // 2022-01-01
        .text_base(Base::Base32)
        .mask_timestamp(true)
        .build()
        .unwrap();

    let mut generator = FlexId::with_config(1042, config).unwrap();
    println!("Total identifier width: {} bits", config.total_bits());
    println!("Max machine ID: {}", config.max_machine_id());
    println!("Max sequence per tick: {}", config.max_sequence());

    let (text, raw) = generator.next_id_text_with_raw();
    println!("\nGenerated: {text} (raw {raw})");

    let info = generator.info(raw).unwrap();
    println!("Masked: {}", info.masked);
    println!("Timestamp recoverable: {}", info.timestamp.is_some());
    println!("Expired? {:?}", generator.is_expired(raw, 60_000).unwrap());
}

use flexid::FlexId;

fn main() {
    // Create a generator with machine ID 1
    let mut generator = FlexId::new(1).unwrap();

    // Generate some IDs
    let id1 = generator.next_id();
    let id2 = generator.next_id();
    let id3 = generator.next_id();

    println!("Generated IDs (monotonic per instance):");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Or extract components individually
    let ts = generator.extract.timestamp(id2);
    let machine = generator.extract.machine_id(id2);
    let seq = generator.extract.sequence(id2);
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {ts} ms since epoch");
    println!("  Machine ID: {machine}");
    println!("  Sequence: {seq}");

    // Text rendering
    let text = generator.encode(id3);
    println!("\nID3 as base62 text: {text}");
    println!("Decoded back: {}", generator.decode_text(&text).unwrap());
}

fn print_id(id: u128, generator: &FlexId) {
    let info = generator.info(id).unwrap();
    println!(
        "  ID: {id}, Timestamp: {:?}, Human date: {:?}, Machine ID: {}, Sequence: {}",
        info.timestamp, info.datetime, info.machine_id, info.sequence
    );
}

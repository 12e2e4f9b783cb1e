use isikukood::*;

fn main() {
    println!("=== Code Validation ===\n");

    let test_codes = [
        "50001010006",
        "38001085718",
        "50001010007",  // wrong checksum
        "99999999999",  // bad gender marker
        "5000101000",   // too short
        "50102290008",  // 2001-02-29 does not exist
    ];

    for code in &test_codes {
        match parse_code(code) {
            Ok(p) => println!(
                "  {code} => valid (gender={}, born={}, order={})",
                p.gender, p.birthdate, p.order_number
            ),
            Err(e) => {
                println!("  {code} => INVALID: {e}");
                for extra in code_report(code).iter().skip(1) {
                    println!("      also: {extra}");
                }
            }
        }
    }

    println!("\n=== Checksum Insertion ===\n");

    for body in ["5000101000", "3800108135", "4870309123x"] {
        match insert_checksum(body) {
            Ok(code) => println!("  {body} => {code}"),
            Err(e) => println!("  {body} => INVALID: {e}"),
        }
    }

    println!("\n=== Construction ===\n");

    let person = match Isikukood::from_parts("f", "1987-03-09") {
        Ok(p) => p,
        Err(e) => {
            eprintln!("  cannot build person: {e}");
            return;
        }
    };
    println!("  person: {person} (gender marker {})", person.gender_marker());
    match person.construct_many(&[0, 1, 2]) {
        Ok(codes) => println!("  first codes: {}", codes.join(", ")),
        Err(e) => println!("  construct failed: {e}"),
    }

    println!("\n=== Enumeration ===\n");

    let constraints = EnumConstraints::new(2000)
        .months([2])
        .days([29])
        .order_numbers([0, 1]);
    match enumerate(&constraints) {
        Ok(codes) => {
            for code in codes {
                println!("  {code}");
            }
        }
        Err(e) => println!("  enumeration failed: {e}"),
    }
}

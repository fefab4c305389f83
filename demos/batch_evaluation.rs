use calcexpr::calculate_all;

fn main() {
    pretty_env_logger::init();

    let expressions = vec![
        "1 + 2",
        "2 ^ (32 - 1) - 1",
        "log(8, 2)",
        "sin(pi / 6)",
        "sqrt(-1)",
        "1 / 0",
        "sqrt(1, 2)",
        "(1 + 2",
    ];

    for (expression, result) in expressions.iter().zip(calculate_all(&expressions)) {
        match result {
            Ok(value) => println!("{:<20} = {}", expression, value),
            Err(err) => println!("{:<20} ! {}", expression, err),
        }
    }
}

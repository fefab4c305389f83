use calcexpr::{parse, Evaluator, Registry};

fn main() {
    pretty_env_logger::init();

    let expression = "max(floor(phi * 10), ceil(e ^ 2)) % 4";
    let ast = parse(expression).expect("Failed to parse");
    println!("AST: {:#?}", ast);

    let evaluator = Evaluator::new(Registry::global());
    match evaluator.evaluate(&ast) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }
}

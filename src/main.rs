use clap::Parser;

/// minicalc is a small command-line calculator for arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the expression in fully parenthesized prefix notation instead
    /// of evaluating it.
    #[arg(short, long)]
    prefix: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let result = if args.prefix {
        minicalc::render_prefix(&args.expression)
    } else {
        minicalc::eval(&args.expression).map(|value| value.to_string())
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

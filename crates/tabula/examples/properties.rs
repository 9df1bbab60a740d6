//! Build a configuration table, sort a report, and emit a properties file.
use tabula::{Order, Properties, StringBuffer, table};

fn main() {
    let mut sizes = table![512, 128, 2048, 64];
    sizes.sort(Order::Descending);

    let mut report = StringBuffer::with_seed("largest first: ");
    for (_, size) in sizes.iter() {
        report.append(size).append(" ");
    }
    println!("{}", report.render().trim_end());

    let mut props = Properties::new();
    props.add_comment("generated by examples/properties.rs");
    props.set("retries", "3");
    props.set("host", "example.com");
    print!("{}", props.render());
}

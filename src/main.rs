use std::env;
use std::error::Error;

use urltoken::encode;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let url = args.next().unwrap_or_default();
    let salt = args.next().unwrap_or_default();

    let out = encode(&url, &salt)?;

    println!("encoded: {}", out.encoded);
    println!("hash:    {}", out.hash);

    Ok(())
}

use steadfast::policy::LimitAttempts;
use steadfast::retry_if;

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut attempts = 0;

    retry_if(
        || {
            attempts += 1;
            println!("attempt {}", attempts);

            if attempts < 4 {
                Err("resource busy")
            } else {
                Ok(())
            }
        },
        LimitAttempts::new(5),
    );

    println!("settled after {} attempts", attempts);
}

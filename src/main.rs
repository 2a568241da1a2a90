use api::Trivia;
use db::Store;
use hyper::{server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use std::{
    convert::Infallible,
    env,
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::{net::TcpListener, runtime::Runtime};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let port = env::var("PORT")?.parse()?;
    let addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, port).into();
    let runtime = Runtime::new()?;

    let Ok(data) = env::var("PG_DATABASE") else {
        log::warn!("PG_DATABASE is not set; questions will only be kept in memory");
        return runtime.block_on(serve(addr, Trivia::new(db::MemoryStore::with_default_categories())));
    };
    let user = env::var("PG_USERNAME")?;
    let pass = env::var("PG_PASSWORD")?;
    let host = env::var("PG_HOSTNAME")?;
    let pg_port = match env::var("PG_PORT") {
        Ok(pg_port) => pg_port.parse()?,
        _ => 5432,
    };

    // Connect to the database
    let (client, conn) = runtime.block_on(
        db::Config::new().user(&user).password(&pass).host(&host).dbname(&data).port(pg_port).connect(db::NoTls),
    )?;
    runtime.spawn(async move {
        if let Err(err) = conn.await {
            log::error!("database connection closed: {err}");
        }
    });
    runtime.block_on(serve(addr, Trivia::new(db::Database::from(client))))
}

/// Accepts connections on `addr` until interrupted.
async fn serve<S>(addr: SocketAddr, trivia: Trivia<S>) -> anyhow::Result<()>
where
    S: Store + Send + Sync + 'static,
{
    let trivia = Arc::new(trivia);
    let listener = TcpListener::bind(addr).await?;
    log::info!("listening on {addr}");

    let stop = tokio::signal::ctrl_c();
    tokio::pin!(stop);
    loop {
        let (stream, peer) = tokio::select! {
            biased;
            result = &mut stop => {
                result?;
                break;
            }
            accepted = listener.accept() => match accepted {
                Ok(pair) => pair,
                Err(err) => {
                    log::warn!("failed to accept connection: {err}");
                    continue;
                }
            },
        };

        let outer = Arc::clone(&trivia);
        let service = service_fn(move |req| {
            let inner = Arc::clone(&outer);
            async move { Ok::<_, Infallible>(inner.respond(req).await) }
        });
        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new().serve_connection(TokioIo::new(stream), service).await {
                log::error!("connection with {peer} failed: {err}");
            }
        });
    }

    log::info!("shutting down");
    Ok(())
}

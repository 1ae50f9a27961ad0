use std::pin::Pin;
use std::task::Poll;
use std::thread;
use std::time::Duration;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;

use crate::i2c::I2CBus;
use crate::sensors::mag::qmc5883l::QMC5883L;
use crate::sensors::mag::{RawSample, SampleError};

const CHANNEL_SIZE: usize = 16;

/// Echantillonnage périodique du magnétomètre dans un thread dédié.
pub struct Reader {
    samples: ReceiverStream<Result<RawSample, SampleError>>,
    token: CancellationToken,
}

impl Reader {
    pub fn new<B>(mag: QMC5883L<B>, interval: Duration, token: CancellationToken) -> Self
    where
        B: I2CBus + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(CHANNEL_SIZE);
        let thread_token = token.clone();

        log::debug!("[MAG] Démarrage du thread ...");
        thread::spawn(move || {
            while !thread_token.is_cancelled() {
                if tx.blocking_send(mag.read_sample()).is_err() {
                    break;
                }

                thread::sleep(interval);
            }

            log::debug!("[MAG] Fin du thread.");
        });

        Reader { samples: ReceiverStream::new(rx), token }
    }
}

impl Stream for Reader {
    type Item = Result<RawSample, SampleError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> Poll<Option<Self::Item>> {
        if self.token.is_cancelled() {
            return Poll::Ready(None);
        }

        Pin::new(&mut self.samples).poll_next(cx)
    }
}

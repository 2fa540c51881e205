use futures::future::{self, Either};
use futures::stream::{self, BoxStream, StreamExt};

/// A stream that emits `value` once and completes.
pub fn constant<T: Send + 'static>(value: T) -> BoxStream<'static, T> {
    stream::once(future::ready(value)).boxed()
}

/// Pair the latest values of two fallible streams.
///
/// Emits once both sides have produced a value, then on every update of
/// either side. The first error is forwarded immediately and ends the
/// stream.
pub fn try_combine_latest<A, B, E>(
    left: BoxStream<'static, Result<A, E>>,
    right: BoxStream<'static, Result<B, E>>,
) -> BoxStream<'static, Result<(A, B), E>>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    E: Send + 'static,
{
    let merged = stream::select(left.map(Either::Left), right.map(Either::Right));
    stream::unfold(
        (merged, Latest::default()),
        |(mut merged, mut latest)| async move {
            if latest.failed {
                return None;
            }
            while let Some(item) = merged.next().await {
                match item {
                    Either::Left(Err(err)) | Either::Right(Err(err)) => {
                        latest.failed = true;
                        return Some((Err(err), (merged, latest)));
                    }
                    Either::Left(Ok(value)) => latest.left = Some(value),
                    Either::Right(Ok(value)) => latest.right = Some(value),
                }
                if let Some(pair) = latest.pair() {
                    return Some((Ok(pair), (merged, latest)));
                }
            }
            None
        },
    )
    .boxed()
}

struct Latest<A, B> {
    left: Option<A>,
    right: Option<B>,
    failed: bool,
}

impl<A, B> Default for Latest<A, B> {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
            failed: false,
        }
    }
}

impl<A: Clone, B: Clone> Latest<A, B> {
    fn pair(&self) -> Option<(A, B)> {
        Some((self.left.clone()?, self.right.clone()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn channel<T: Send + 'static>() -> (
        mpsc::UnboundedSender<T>,
        BoxStream<'static, T>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let rx = stream::unfold(rx, |mut rx| async move { rx.recv().await.map(|v| (v, rx)) });
        (tx, rx.boxed())
    }

    #[tokio::test]
    async fn test_waits_for_both_sides() {
        let (left_tx, left) = channel::<Result<i32, String>>();
        let right = constant(Ok::<_, String>("r"));
        let mut combined = try_combine_latest(left, right);

        left_tx.send(Ok(1)).unwrap();
        assert_eq!(combined.next().await, Some(Ok((1, "r"))));

        left_tx.send(Ok(2)).unwrap();
        assert_eq!(combined.next().await, Some(Ok((2, "r"))));

        drop(left_tx);
        assert_eq!(combined.next().await, None);
    }

    #[tokio::test]
    async fn test_error_ends_stream() {
        let (left_tx, left) = channel::<Result<i32, String>>();
        let (right_tx, right) = channel::<Result<i32, String>>();
        let mut combined = try_combine_latest(left, right);

        right_tx.send(Err("boom".to_string())).unwrap();
        left_tx.send(Ok(1)).unwrap();

        assert_eq!(combined.next().await, Some(Err("boom".to_string())));
        assert_eq!(combined.next().await, None);
    }
}

//! Output sinks for compressed data.

/// Consumer of compressed bytes.
///
/// A sink is driven by exactly one thread: the dispatcher writes either once
/// per block (serial path) or once per image (parallel path, after all
/// workers have joined), so implementations never need to be thread-safe.
pub trait OutputSink {
    /// Receive the next run of output bytes.
    fn write_data(&mut self, data: &[u8]);
}

/// Output configuration: where compressed bytes go.
///
/// The sink is optional. Without one, compression still runs every encoder
/// invocation and the resulting bytes are silently discarded, which is
/// useful for dry runs and benchmarks.
#[derive(Default)]
pub struct OutputOptions {
    sink: Option<Box<dyn OutputSink>>,
}

impl OutputOptions {
    /// Output options with no sink configured.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: impl OutputSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn set_sink(&mut self, sink: Box<dyn OutputSink>) {
        self.sink = Some(sink);
    }

    /// Remove and return the configured sink, if any.
    pub fn take_sink(&mut self) -> Option<Box<dyn OutputSink>> {
        self.sink.take()
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Forward bytes to the sink, or drop them when none is configured.
    pub(crate) fn write_data(&mut self, data: &[u8]) {
        if let Some(sink) = self.sink.as_mut() {
            sink.write_data(data);
        }
    }
}

impl std::fmt::Debug for OutputOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputOptions")
            .field("sink", &self.sink.as_ref().map(|_| "dyn OutputSink"))
            .finish()
    }
}

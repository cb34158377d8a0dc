mod support;
mod synthesizer;

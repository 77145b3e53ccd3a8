mod config_tests;
mod sequencer_tests;
mod support;

#![cfg(test)]

mod scenarios;
mod util;

use clap::builder::{StringValueParser, TypedValueParser};
use clap::error::ErrorKind::Format;
use clap::{Arg, Command, Error};
use parse_duration::parse;
use std::ffi::OsStr;
use std::time::Duration;

/// Accepts human durations such as `5s`, `1500ms` or `1m`.
#[derive(Clone)]
pub struct DurationValueParser;

impl TypedValueParser for DurationValueParser {
    type Value = Duration;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, Error> {
        let value = StringValueParser::new().parse_ref(cmd, arg, value)?;
        parse(&value).map_err(|message| {
            Error::raw(Format, format!("Invalid duration {value:?}: {message}\n"))
        })
    }
}

// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt::Display;

/// The type of fallible computations.
pub type Fallible<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// A generic error with a human-readable message.
#[derive(Debug)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {}

/// Shorthand to return an `ErrorReport` from a fallible function.
pub fn fail<T>(message: impl Into<String>) -> Fallible<T> {
    Err(Box::new(ErrorReport::new(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_report_display() {
        let err = ErrorReport::new("something went wrong");
        assert_eq!(err.to_string(), "error: something went wrong");
    }

    #[test]
    fn test_fail() {
        let result: Fallible<()> = fail("directory does not exist.");
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }
}

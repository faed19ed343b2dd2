use logos::Logos;

use crate::error::loader::*;

/// Program text tokens: one binary instruction word or operand byte per
/// line, `#` comments to end of line, blank lines allowed.
#[derive(Logos, Debug, Clone, PartialEq)]
enum TokenKind {
	#[regex("[01]{1,8}", |lex| u8::from_str_radix(lex.slice(), 2).unwrap())]
	Word(u8),

	// Nine or more digits no longer fit one memory cell.
	#[regex("[01]{9,}")]
	Oversized,

	#[token("\n")]
	Newline,

	#[error]
	#[regex(r"[ \t\r\f]+", logos::skip)]
	#[regex("#[^\n]*", logos::skip)]
	Error,
}

/// Parses program text into the byte sequence the engine loads at address
/// 0. Nothing is silently zero-filled: any non-blank, non-comment line that
/// is not exactly one binary literal is fatal.
pub fn parse(source: &str) -> LoaderResult<Vec<u8>> {
	let mut lexer = TokenKind::lexer(source);
	let mut program = Vec::new();
	let mut line = 1;
	let mut words_on_line = 0;

	while let Some(token) = lexer.next() {
		match token {
			TokenKind::Word(byte) if words_on_line == 0 => {
				program.push(byte);
				words_on_line = 1;
			}
			TokenKind::Newline => {
				line += 1;
				words_on_line = 0;
			}
			// A second word on the same line, an over-long literal, or
			// anything that is not a binary literal.
			_ => {
				return Err(LoaderError::MalformedLine {
					line,
					text: lexer.slice().to_string(),
				})
			}
		}
	}

	Ok(program)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::opcode::Opcode;

	#[test]
	fn parses_the_mult_demo() {
		let program = parse(include_str!("../demos/mult.ls8")).unwrap();
		assert_eq!(
			program,
			vec![
				Opcode::Ldi as u8, 0, 8,
				Opcode::Ldi as u8, 1, 9,
				Opcode::Mul as u8, 0, 1,
				Opcode::Prn as u8, 0,
				Opcode::Hlt as u8,
			]
		);
	}

	#[test]
	fn skips_comments_and_blank_lines() {
		let source = "# header\n\n10000010  # LDI R0,5\n00000000\n00000101\n\n# trailer\n";
		assert_eq!(parse(source), Ok(vec![0b1000_0010, 0, 5]));
	}

	#[test]
	fn comment_only_program_is_empty() {
		assert_eq!(parse("# nothing here\n\n"), Ok(vec![]));
	}

	#[test]
	fn short_literals_are_left_zero_implied() {
		assert_eq!(parse("101\n1\n"), Ok(vec![5, 1]));
	}

	#[test]
	fn rejects_non_binary_text() {
		assert_eq!(
			parse("10000010\n2\n"),
			Err(LoaderError::MalformedLine {
				line: 2,
				text: "2".into()
			})
		);
	}

	#[test]
	fn rejects_two_words_on_one_line() {
		assert_eq!(
			parse("10000010 00000000\n"),
			Err(LoaderError::MalformedLine {
				line: 1,
				text: "00000000".into()
			})
		);
	}

	#[test]
	fn rejects_oversized_literals() {
		assert_eq!(
			parse("000000001\n"),
			Err(LoaderError::MalformedLine {
				line: 1,
				text: "000000001".into()
			})
		);
	}

	#[test]
	fn blank_lines_still_count_toward_line_numbers() {
		let LoaderError::MalformedLine { line, .. } = parse("\n\n10000010\nwhat\n").unwrap_err();
		assert_eq!(line, 4);
	}
}

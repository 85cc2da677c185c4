// Internal Dependencies ------------------------------------------------------
use crate::error::ZealError;


// Statics --------------------------------------------------------------------
pub const MAX_RUN_LENGTH: usize = 128;
const REPEAT_MARKER: u8 = 0x80;


// Runs -----------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run<'a> {
    /// Bytes copied verbatim, control byte `0x00..=0x7F`.
    Literal(&'a [u8]),
    /// A single byte repeated, control byte `0x80..=0xFF`.
    Repeat { value: u8, count: usize }
}

impl<'a> Run<'a> {

    pub fn len(&self) -> usize {
        match self {
            Run::Literal(bytes) => bytes.len(),
            Run::Repeat { count, .. } => *count
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            Run::Literal(bytes) => 1 + bytes.len(),
            Run::Repeat { .. } => 2
        }
    }

    fn serialize(&self, output: &mut Vec<u8>) {
        match self {
            Run::Literal(bytes) => {
                output.push((bytes.len() - 1) as u8);
                output.extend_from_slice(bytes);
            },
            Run::Repeat { value, count } => {
                output.push((*count - 1) as u8 | REPEAT_MARKER);
                output.push(*value);
            }
        }
    }

}


// Statistics -----------------------------------------------------------------
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RleStats {
    pub literal_runs: usize,
    pub literal_bytes: usize,
    pub repeat_runs: usize,
    pub repeat_bytes: usize,
    pub input_len: usize,
    pub output_len: usize
}

impl RleStats {
    pub fn ratio(&self) -> f32 {
        if self.input_len == 0 {
            1.0

        } else {
            self.output_len as f32 / self.input_len as f32
        }
    }
}


// Encoder --------------------------------------------------------------------
pub struct Encoder;
impl Encoder {

    /// Splits the input into runs, scanning left to right.
    pub fn analyze(data: &[u8]) -> Vec<Run> {
        let mut runs = Vec::new();
        let mut index = 0;
        while index < data.len() {
            let diff = Self::diff_run(&data[index..]);
            if diff > 0 {
                runs.push(Run::Literal(&data[index..index + diff]));
                index += diff;

            } else {
                let same = Self::same_run(&data[index..]);
                runs.push(Run::Repeat {
                    value: data[index],
                    count: same
                });
                index += same;
            }
        }
        runs
    }

    pub fn serialize(runs: &[Run]) -> Vec<u8> {
        let mut output = Vec::with_capacity(runs.iter().map(Run::encoded_len).sum());
        for run in runs {
            run.serialize(&mut output);
        }
        output
    }

    fn same_run(data: &[u8]) -> usize {
        data.iter().take(MAX_RUN_LENGTH).take_while(|b| **b == data[0]).count()
    }

    // Counts neighbouring pairs that differ, so a trailing byte without
    // successor is never part of a literal.
    fn diff_run(data: &[u8]) -> usize {
        data.windows(2).take(MAX_RUN_LENGTH).take_while(|w| w[0] != w[1]).count()
    }

}

pub fn encode(data: &[u8]) -> Vec<u8> {
    Encoder::serialize(&Encoder::analyze(data))
}

pub fn analyze(data: &[u8]) -> RleStats {
    let runs = Encoder::analyze(data);
    let mut stats = RleStats {
        input_len: data.len(),
        ..RleStats::default()
    };
    for run in &runs {
        match run {
            Run::Literal(bytes) => {
                stats.literal_runs += 1;
                stats.literal_bytes += bytes.len();
            },
            Run::Repeat { count, .. } => {
                stats.repeat_runs += 1;
                stats.repeat_bytes += count;
            }
        }
        stats.output_len += run.encoded_len();
    }
    stats
}


// Decoder --------------------------------------------------------------------
pub fn decode(data: &[u8]) -> Result<Vec<u8>, ZealError> {
    let mut output = Vec::with_capacity(data.len() * 2);
    let mut index = 0;
    while index < data.len() {
        let control = data[index];
        index += 1;
        if control < REPEAT_MARKER {
            let count = control as usize + 1;
            let bytes = data.get(index..index + count).ok_or_else(|| {
                ZealError::truncated("RLE literal run", data.len())
            })?;
            output.extend_from_slice(bytes);
            index += count;

        } else {
            let count = (control - REPEAT_MARKER) as usize + 1;
            let value = *data.get(index).ok_or_else(|| {
                ZealError::truncated("RLE repeat run", data.len())
            })?;
            output.resize(output.len() + count, value);
            index += 1;
        }
    }
    Ok(output)
}


#[cfg(test)]
mod test {

    use super::{analyze, decode, encode, Encoder, Run, MAX_RUN_LENGTH};
    use crate::error::ZealError;

    macro_rules! test_encode {
        ($input:expr, $expected:expr) => {
            let input: Vec<u8> = $input;
            let result = encode(&input);
            assert_eq!(result, $expected);
            assert_eq!(decode(&result).unwrap(), input);
        }
    }

    #[test]
    fn test_encode_empty() {
        test_encode!(Vec::new(), Vec::<u8>::new());
        assert_eq!(decode(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encode_single_byte() {
        test_encode!(vec![42], vec![0x80, 42]);
    }

    #[test]
    fn test_encode_repeats() {
        test_encode!(vec![5, 5, 5, 9, 9], vec![0x82, 5, 0x81, 9]);
        test_encode!(vec![0; 4], vec![0x83, 0]);
    }

    #[test]
    fn test_encode_literal_leaves_final_byte() {
        test_encode!(vec![1, 2, 3], vec![
            1, 1, 2,
            0x80, 3
        ]);
        test_encode!(vec![1, 2, 2, 2], vec![
            0, 1,
            0x82, 2
        ]);
        test_encode!(vec![7, 7, 1, 2, 3, 3], vec![
            0x81, 7,
            1, 1, 2,
            0x81, 3
        ]);
    }

    #[test]
    fn test_encode_max_repeat() {
        test_encode!(vec![1; 128], vec![0xFF, 1]);
        test_encode!(vec![1; 129], vec![0xFF, 1, 0x80, 1]);
        test_encode!(vec![1; 300], vec![0xFF, 1, 0xFF, 1, 0xAB, 1]);
    }

    #[test]
    fn test_encode_max_literal() {
        let input: Vec<u8> = (0..=255).collect();
        let result = encode(&input);
        assert_eq!(result[0], 0x7F);
        assert_eq!(&result[1..129], &input[..128]);
        assert_eq!(result[129], 0x7E);
        assert_eq!(&result[130..257], &input[128..255]);
        assert_eq!(&result[257..], &[0x80u8, 255][..]);
        assert_eq!(decode(&result).unwrap(), input);
    }

    #[test]
    fn test_runs() {
        let data = [4, 4, 4, 1, 2, 2];
        assert_eq!(Encoder::analyze(&data), vec![
            Run::Repeat { value: 4, count: 3 },
            Run::Literal(&[1]),
            Run::Repeat { value: 2, count: 2 }
        ]);
        assert!(Encoder::analyze(&data).iter().all(|r| r.len() <= MAX_RUN_LENGTH));
    }

    #[test]
    fn test_round_trip_patterns() {
        let patterns: Vec<Vec<u8>> = vec![
            (0..1000).map(|i| (i % 3) as u8).collect(),
            (0..1000).map(|i| (i / 5) as u8).collect(),
            (0..1000).map(|i| ((i * 31) % 17) as u8 & 0x3).collect(),
            (0..515).map(|i| if i % 130 < 129 { 9 } else { 1 }).collect()
        ];
        for input in patterns {
            let encoded = encode(&input);
            assert!(encoded.len() <= input.len() * 2);
            assert_eq!(decode(&encoded).unwrap(), input);
        }
    }

    #[test]
    fn test_worst_case_expansion() {
        // Alternating single bytes and pairs
        let input: Vec<u8> = (0..300).map(|i| ((i + 1) / 3 * 2 + (i + 1) % 3 / 2) as u8).collect();
        let encoded = encode(&input);
        assert!(encoded.len() <= input.len() * 2);
        assert_eq!(decode(&encoded).unwrap(), input);
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode(&[0x82]), Err(ZealError::truncated("RLE repeat run", 1)));
        assert_eq!(decode(&[0x03, 1, 2]), Err(ZealError::truncated("RLE literal run", 3)));
        assert_eq!(decode(&[0x80, 1, 0x01, 1]), Err(ZealError::truncated("RLE literal run", 4)));
    }

    #[test]
    fn test_analyze_stats() {
        let stats = analyze(&[5, 5, 5, 9, 1, 2, 2]);
        assert_eq!(stats.repeat_runs, 2);
        assert_eq!(stats.repeat_bytes, 5);
        assert_eq!(stats.literal_runs, 1);
        assert_eq!(stats.literal_bytes, 2);
        assert_eq!(stats.input_len, 7);
        assert_eq!(stats.output_len, 7);
        assert!((stats.ratio() - 1.0).abs() < f32::EPSILON);
    }

}

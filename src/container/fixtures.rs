//! Blueprints captured from the game, each exercising one outcome of the parser.

pub(crate) const BOARD_36X27: &str = "VCB+AAAA0uk88vwPAAAAJAAAABsAAADHAAAAAAAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAHgAAAAEAAA8wKLUv/WAwDkUAAAgAAQAs94EQAAAAHgAAAAIAAA8wKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const ZERO_WIDTH: &str = "VCB+AAAAiCfEaTU8AAAAAAAAABsAAADHAAAAAAAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAHgAAAAEAAA8wKLUv/WAwDkUAAAgAAQAs94EQAAAAHgAAAAIAAA8wKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const BOARD_SHRUNK: &str = "VCB+AAAAMr+03O3ZAAAAEgAAAA0AAADHAAAAAAAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAHgAAAAEAAA8wKLUv/WAwDkUAAAgAAQAs94EQAAAAHgAAAAIAAA8wKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const BOARD_GROWN: &str = "VCB+AAAAAmzcID4qAAAASAAAADYAAADHAAAAAAAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAHgAAAAEAAA8wKLUv/WAwDkUAAAgAAQAs94EQAAAAHgAAAAIAAA8wKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const BLOCK_SIZE_ZERO: &str = "VCB+AAAAvGiQG80QAAAAJAAAABsAAAAAAAAAAAAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAAAAAAAEAAA8wKLUv/WAwDkUAAAgAAQAs94EQAAAAAAAAAAIAAA8wKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const BLOCK_SIZE_FOUR: &str = "VCB+AAAAeNtg+RMFAAAAJAAAABsAAAAEAAAAAAAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAABAAAAAEAAA8wKLUv/WAwDkUAAAgAAQAs94EQAAAABAAAAAIAAA8wKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const BLOCK_SIZE_PAST_END: &str = "VCB+AAAA+vhGD7FCAAAAJAAAABsAAAfGAAAAAAAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAABLAAAAAEAAA8wKLUv/WAwDkUAAAgAAQAs94EQAAABLAAAAAIAAA8wKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const BLOCK_SIZE_FAR_PAST_END: &str = "VCB+AAAA1jHFwXd9AAAAJAAAABt/////AAAAAAAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBf////wAAAAEAAA8wKLUv/WAwDkUAAAgAAQAs94EQf////wAAAAIAAA8wKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const LAYER_SIZE_ZERO: &str = "VCB+AAAAPVRUo2IdAAAAJAAAABsAAADHAAAAAAAAAAAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAHgAAAAEAAAAAKLUv/WAwDkUAAAgAAQAs94EQAAAAHgAAAAIAAAAAKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const LAYER_SIZE_HALF: &str = "VCB+AAAARZIbQT6SAAAAJAAAABsAAADHAAAAAAAAB5gotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAHgAAAAEAAAeYKLUv/WAwDkUAAAgAAQAs94EQAAAAHgAAAAIAAAeYKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const LAYER_SIZE_DOUBLE: &str = "VCB+AAAAZc1YO7UtAAAAJAAAABsAAADHAAAAAAAAHmAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAHgAAAAEAAB5gKLUv/WAwDkUAAAgAAQAs94EQAAAAHgAAAAIAAB5gKLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const LAYER_SIZE_ABSURD: &str = "VCB+AAAAyvTsJZUhAAAAJAAAABsAAADHAAAAAH////8otS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAHgAAAAF/////KLUv/WAwDkUAAAgAAQAs94EQAAAAHgAAAAJ/////KLUv/WAwDkUAAAgAAQAs94EQ";

pub(crate) const SCRAMBLED_PAYLOADS: &str = "VCB+AAAAK4OaVs95AAAAJAAAABsAAADHAAAAAAAADzA4y3+Mn6UCDykHGVMJqqpwfxwcAk5jbOVv4308B4KwuJcJtRdyzaHqdZBAnPKirLDtSx5Ki24F8cdmVZNnNCLJLtxtXVQMPgoz//OCQ6HXtkj09lHKsjCFxjSNC6OS0GVnDE9nK6gB9c0d2Q7k8FIK+d1MH/R4FirUFMyso+TjE6lgAjzh6hM1qbKbR73XRjRmz8e97wjeZ1nPun9QcoJcXaEv5FwanFIxhuA2t53bvPmRDzKlqrHFvS0AAAAAHgAAAAEAAA8wi5CD1sfpl31ohoDD0stgUeG4AAAAHgAAAAIAAA8wjDgrGe3Nhvymt8to9kbZTGAH";

pub(crate) const DECORATION_ONLY: &str = "VCB+AAAAM7k8XriiAAAAJAAAABsAAAAeAAAAAQAADzAotS/9YDAORQAACAABACz3gRAAAAAeAAAAAgAADzAotS/9YDAORQAACAABACz3gRA=";

pub(crate) const TWO_LOGIC_LAYERS: &str = "VCB+AAAA0l/lGhNpAAAAJAAAABsAAADHAAAAAAAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAxwAAAAAAAA8wKLUv/WAwDo0FACQCAGZ4jv8qNUH/TTg+///GY///xmP/MNn/AP9iii5HXZL/Yz2gsBVmWgNgiEiR2B2AczsdedsigvqJTjtD7SGUuCiUD1TaGvUIozXHNkR0QtGxSzmuSG1iJHRsBz6iyJYUjVHvPGNGEDWdMLZk/UmZUF1LWSERbGyoGQs7bHxUOmWGkZS2xQWFskWhFpBwI6EucduxuSLjcjuWHNBp01MYwqT42b5mOp7TS+Eel8a1AQAAAB4AAAABAAAPMCi1L/1gMA5FAAAIAAEALPeBEAAAAB4AAAACAAAPMCi1L/1gMA5FAAAIAAEALPeBEA==";

pub(crate) const LOGIC_LAYER_LAST: &str = "VCB+AAAAjytXLhy/AAAAJAAAABsAAAAeAAAAAgAADzAotS/9YDAORQAACAABACz3gRAAAAAeAAAAAQAADzAotS/9YDAORQAACAABACz3gRAAAADHAAAAAAAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUB";

pub(crate) const UNKNOWN_LAYER_IDS: &str = "VCB+AAAAYdorFBBPAAAAJAAAABsAAADHAAAACgAADzAotS/9YDAOjQUAJAIAZniO/yo1Qf9NOD7//8Zj///GY/8w2f8A/2KKLkddkv9jPaCwFWZaA2CISJHYHYBzOx152yKC+olOO0PtIZS4KJQPVNoa9QijNcc2RHRC0bFLOa5IbWIkdGwHPqLIlhSNUe88Y0YQNZ0wtmT9SZlQXUtZIRFsbKgZCztsfFQ6ZYaRlLbFBYWyRaEWkHAjoS5x27G5IuNyO5Yc0GnTUxjCpPjZvmY6ntNL4R6XxrUBAAAAHgAAAAsAAA8wKLUv/WAwDkUAAAgAAQAs94EQAAAAHgAAAAwAAA8wKLUv/WAwDkUAAAgAAQAs94EQ";

/// Every fixture paired with the error code it must produce, or `None` when it parses.
pub(crate) const ALL: &[(&str, &str, Option<&str>)] = &[
    ("BOARD_36X27", BOARD_36X27, None),
    ("ZERO_WIDTH", ZERO_WIDTH, Some("degenerate_dimensions")),
    ("BOARD_SHRUNK", BOARD_SHRUNK, Some("size_mismatch")),
    ("BOARD_GROWN", BOARD_GROWN, Some("size_mismatch")),
    ("BLOCK_SIZE_ZERO", BLOCK_SIZE_ZERO, Some("block_too_small")),
    ("BLOCK_SIZE_FOUR", BLOCK_SIZE_FOUR, Some("block_too_small")),
    ("BLOCK_SIZE_PAST_END", BLOCK_SIZE_PAST_END, Some("block_out_of_bounds")),
    ("BLOCK_SIZE_FAR_PAST_END", BLOCK_SIZE_FAR_PAST_END, Some("block_out_of_bounds")),
    ("LAYER_SIZE_ZERO", LAYER_SIZE_ZERO, Some("size_mismatch")),
    ("LAYER_SIZE_HALF", LAYER_SIZE_HALF, Some("size_mismatch")),
    ("LAYER_SIZE_DOUBLE", LAYER_SIZE_DOUBLE, Some("size_mismatch")),
    ("LAYER_SIZE_ABSURD", LAYER_SIZE_ABSURD, Some("oversized_payload")),
    ("SCRAMBLED_PAYLOADS", SCRAMBLED_PAYLOADS, Some("corrupt_payload")),
    ("DECORATION_ONLY", DECORATION_ONLY, Some("missing_logic_layer")),
    ("TWO_LOGIC_LAYERS", TWO_LOGIC_LAYERS, Some("duplicate_logic_layer")),
    ("LOGIC_LAYER_LAST", LOGIC_LAYER_LAST, None),
    ("UNKNOWN_LAYER_IDS", UNKNOWN_LAYER_IDS, Some("missing_logic_layer")),
];

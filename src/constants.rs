pub const MATRIX_DIM: u8 = 8;

/// Characters the chip's Code B font can render, in font-code order
/// (the font code of a character is its index in this table).
pub const FONT_CHARS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '-', 'E', 'H', 'L', 'P', ' ',
];

/// OR with a font code to light the digit's decimal point.
pub const DECIMAL_POINT: u8 = 0xE0;

pub mod register {
    pub const NO_OP: u8 = 0x00; // used only for daisy-chained parts
    pub const DIGIT_OFFSET: u8 = 0x01; // Digit0 - Digit7 at 0x01 - 0x08
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // raw segment data for digits 7:0
        pub const DECODE_ALL: u8 = 0xFF; // Code B decode for digits 7:0
    }

    pub mod shutdown_mode {
        pub const SHUTDOWN: u8 = 0x00; // bit 0 clear: shutdown mode
        pub const NORMAL_OPERATION: u8 = 0x01; // bit 0 set: normal operation
    }

    pub mod display_test_mode {
        pub const NORMAL_OPERATION: u8 = 0x00;
        pub const DISPLAY_TEST: u8 = 0x01; // all LEDs on regardless of digit data
    }
}

//! EEPROM dumps shared by the unit tests

fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// 10GBASE-SR SFP+ module, 256 bytes
pub fn sfp_plus() -> Vec<u8> {
    let mut buf = vec![0u8; 256];
    put(&mut buf, 0, &[0x03, 0x04, 0x07]);
    put(&mut buf, 3, &[0x10, 0, 0, 0, 0, 0, 0, 0]);
    put(&mut buf, 11, &[0x06, 0x67, 0x00]);
    put(&mut buf, 14, &[0, 0, 8, 3, 0, 30]);
    put(&mut buf, 20, b"FINISAR CORP.   ");
    put(&mut buf, 37, &[0x00, 0x90, 0x65]);
    put(&mut buf, 40, b"FTLX8571D3BCL   ");
    put(&mut buf, 56, b"A   ");
    put(&mut buf, 60, &[0x03, 0x52, 0x00, 0x4b, 0x00, 0x1a, 0x00, 0x00]);
    put(&mut buf, 68, b"ALA1234         ");
    put(&mut buf, 84, b"160412XX");
    put(&mut buf, 92, &[0x68, 0xf0, 0x03, 0x9c]);
    // Vendor specific area
    for (i, b) in buf[96..].iter_mut().enumerate() {
        *b = i as u8;
    }
    buf
}

/// 100GBASE-SR4 QSFP28 module, lower page plus pages 00h-03h
pub fn qsfp28() -> Vec<u8> {
    let mut buf = vec![0u8; 640];
    put(&mut buf, 0, &[0x11, 0x07, 0x02]);
    put(&mut buf, 22, &[0x1a, 0x40]);
    put(&mut buf, 93, &[0x05]);
    put(&mut buf, 127, &[0x00]);

    put(&mut buf, 128, &[0x11, 0xcc, 0x0c]);
    put(&mut buf, 131, &[0x80, 0, 0, 0, 0, 0, 0, 0]);
    put(&mut buf, 139, &[0x05, 0xff, 0x00]);
    put(&mut buf, 142, &[0, 35, 0, 0, 100, 0x00]);
    put(&mut buf, 148, b"FINISAR CORP    ");
    put(&mut buf, 165, &[0x00, 0x90, 0x65]);
    put(&mut buf, 168, b"FTLC9551REPM    ");
    put(&mut buf, 184, b"A0");
    put(&mut buf, 186, &[0x42, 0x68, 0x0b, 0xb8, 0x46, 0x5e]);
    put(&mut buf, 192, &[0x02, 0x07, 0xff, 0xde]);
    put(&mut buf, 196, b"X5BAAAA         ");
    put(&mut buf, 212, b"170301  ");
    put(&mut buf, 220, &[0x0c, 0x10, 0x67, 0x7c]);
    for (i, b) in buf[256..].iter_mut().enumerate() {
        *b = (i % 251) as u8;
    }
    buf
}

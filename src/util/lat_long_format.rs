pub struct LatLongFormat {
    pos_token: char,
    neg_token: char,
}

impl LatLongFormat {
    pub fn lat_format() -> Self {
        LatLongFormat { pos_token: 'N', neg_token: 'S' }
    }

    pub fn long_format() -> Self {
        LatLongFormat { pos_token: 'E', neg_token: 'W' }
    }

    fn dec_to_degree(&self, buff: &mut String, d: f64, bearing: char) {
        let mut deg = d.floor();
        let minsec = (d - deg) * 60.0;
        let mut min = minsec.floor();
        let mut sec = (minsec - min) * 60.0;

        if (60.0 - sec) < 0.005 {
            sec = 0.0;
            min += 1.0;
        }

        if (60.0 - min) < 0.005 {
            min = 0.0;
            deg += 1.0;
        }

        buff.push_str(&format!(
            "{:02}\u{00b0}{:02}\"{:02}\'{}",
            deg,
            min,
            sec.floor(),
            bearing
        ));
    }

    pub fn format(&self, number: f64) -> String {
        let token = if number < 0.0 { self.neg_token } else { self.pos_token };
        let mut buffer = String::new();
        self.dec_to_degree(&mut buffer, number.abs(), token);
        buffer
    }
}

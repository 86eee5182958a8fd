// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(graph) = dirgraph::format::parse_graph(text) {
        // Whatever parses must write back to an equal graph
        let written = dirgraph::format::to_edge_list(&graph);
        let back = dirgraph::format::parse_graph(&written).expect("written graph reparses");
        assert_eq!(back.to_document(), graph.to_document());
    }
});

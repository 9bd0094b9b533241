use anyhow::{bail, Context, Result};
use classic_algo::algo::dp::{coin_change_coins, lcs_sequence};
use classic_algo::algo::greedy::HuffmanTree;
use classic_algo::algo::recursion::tower_of_hanoi;
use classic_algo::algo::sort::{merge_sort, quick_sort};
use classic_algo::algo::{dijkstra, dijkstra_dense};
use classic_algo::graphs::traits::RandomAccessGraph;
use classic_algo::graphs::NamedGraph;
use dsi_progress_logger::prelude::*;
use std::collections::BTreeMap;

const USAGE: &str = "Usage: classic-algo <operation> <args...>

Operations:
    sort <n>...                 sorts integers with merge sort and quick sort
    lcs <a> <b>                 longest common subsequence of two strings
    coins <amount> <coin>...    fewest coins summing to amount
    hanoi <disks>               moves solving the Tower of Hanoi
    huffman <text>              Huffman code of the characters of text
    dijkstra <start> <u,v,w>... distances on an undirected weighted graph";

fn parse_all<T: std::str::FromStr>(args: &[String]) -> Result<Vec<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.iter()
        .map(|arg| {
            arg.parse()
                .with_context(|| format!("Cannot parse argument {arg:?}"))
        })
        .collect()
}

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((operation, args)) = args.split_first() else {
        bail!("No operation provided\n\n{USAGE}");
    };

    match operation.as_str() {
        "sort" => {
            let seq: Vec<i64> = parse_all(args)?;
            let sorted = merge_sort(&seq);
            debug_assert_eq!(sorted, quick_sort(&seq));
            println!("{sorted:?}");
        }
        "lcs" => {
            let [a, b] = args else {
                bail!("lcs needs two strings\n\n{USAGE}");
            };
            let a: Vec<char> = a.chars().collect();
            let b: Vec<char> = b.chars().collect();
            let common: String = lcs_sequence(&a, &b).into_iter().collect();
            println!("{} {common:?}", common.chars().count());
        }
        "coins" => {
            let (amount, coins) = args
                .split_first()
                .with_context(|| format!("No amount provided\n\n{USAGE}"))?;
            let amount: usize = amount.parse().context("Cannot parse amount")?;
            let coins: Vec<usize> = parse_all(coins)?;
            match coin_change_coins(&coins, amount) {
                Some(change) => println!("{} {change:?}", change.len()),
                None => println!("-1"),
            }
        }
        "hanoi" => {
            let [disks] = args else {
                bail!("hanoi needs the number of disks\n\n{USAGE}");
            };
            let disks: u32 = disks.parse().context("Cannot parse number of disks")?;
            for m in tower_of_hanoi(disks, 'A', 'B', 'C')? {
                println!("Move disk {} from {} to {}", m.disk, m.from, m.to);
            }
        }
        "huffman" => {
            let [text] = args else {
                bail!("huffman needs a text\n\n{USAGE}");
            };
            let mut counts = BTreeMap::new();
            for c in text.chars() {
                *counts.entry(c).or_insert(0_u64) += 1;
            }
            let symbols: Vec<char> = counts.keys().copied().collect();
            let frequencies: Vec<u64> = counts.values().copied().collect();
            let tree = HuffmanTree::new(&symbols, &frequencies)?;
            for (symbol, code) in tree.codes() {
                println!("{symbol:?} {code}");
            }
            let message: Vec<char> = text.chars().collect();
            println!("{} bits", tree.encode(&message)?.len());
        }
        "dijkstra" => {
            let (start, edges) = args
                .split_first()
                .with_context(|| format!("No start node provided\n\n{USAGE}"))?;
            let mut graph = NamedGraph::new();
            for edge in edges {
                let parts: Vec<&str> = edge.split(',').collect();
                let [u, v, w] = parts[..] else {
                    bail!("Edges must have the form u,v,w: {edge:?}");
                };
                let w: u64 = w
                    .parse()
                    .with_context(|| format!("Cannot parse weight of edge {edge:?}"))?;
                graph.add_labeled_arc(u, v, w);
                graph.add_labeled_arc(v, u, w);
            }
            let start = graph.try_node(start)?;

            let mut main_pl = progress_logger![display_memory = true];
            let paths = dijkstra(&graph, start, &mut main_pl);
            debug_assert_eq!(paths, dijkstra_dense(&graph, start, &mut main_pl));
            for node in 0..graph.num_nodes() {
                match paths.distance(node) {
                    Some(d) => println!("{} {d}", graph.name(node)),
                    None => println!("{} unreachable", graph.name(node)),
                }
            }
        }
        _ => bail!("Unknown operation {operation:?}\n\n{USAGE}"),
    }

    Ok(())
}

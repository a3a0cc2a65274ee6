use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{take, tag, take_until};
use nom::character::complete::{digit1, space1};
use nom::combinator::{map_res, opt};
use nom::multi::many0;
use nom::sequence::{preceded, separated_pair, terminated};

use crate::graph::VertexId;

/// skips a single comment line
fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(tag("c"), terminated(take_until("\n"), take(1_usize)))(s)
}

/// skips all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    many0(skip_comment)(s)
}

/// reads an integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, str::parse)(s)
}

/// reads two numbers separated by a space (possibly followed by a newline)
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(
        separated_pair(read_integer, space1, read_integer),
        opt(tag("\n"))
    )(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge "), tag("p col "))), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tag("e "), read_two_integers)(s)
}

/// reads an instance from file, returns (n,m,adj_list)
pub fn read_from_file(filename:&str) -> (usize, usize, Vec<Vec<usize>>) {
    let s1 = fs::read_to_string(filename)
        .expect("Instance: unable to read file").replace('\r',"");
    let s2 = skip_comments(s1.as_str()).unwrap().0;
    let (mut s3,(n,m)) = read_header(s2).unwrap();
    let mut adj_list = vec![Vec::new();n];
    let mut check_nb_edges = 0;
    while match read_edge(s3) {
        Ok((tmp,(a,b))) => {
            s3 = tmp;
            adj_list[a-1].push(b-1);
            adj_list[b-1].push(a-1);
            check_nb_edges += 1;
            true
        }
        Err(_) => false
    } {}
    assert!(
        check_nb_edges == m || 2*check_nb_edges == m,
        "check: {}\t m: {}", check_nb_edges, m
    );
    (n, m, adj_list)
}

/** writes a string encoding a vertex set (one vertex id per token) */
pub fn solution_to_string(solution:&[VertexId]) -> String {
    let mut res = String::default();
    for v in solution {
        res += format!("{} ", v).as_str();
    }
    res += "\n";
    res
}

/** writes a vertex set into a file. */
pub fn write_solution(filename:&str, solution:&[VertexId]) {
    fs::write(filename, solution_to_string(solution))
        .unwrap_or_else(|_|
            panic!("write_solution: unable to write the solution in {}", filename)
        );
}

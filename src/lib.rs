pub mod configuration;

pub mod degenerateinput;

pub mod engine;

pub mod formula {
    pub mod formula;
    pub mod parsefailure;
    pub mod typeset;
    pub mod formulacompiler;
    pub mod formulacache;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod curvesampler;
    }
    pub mod round;
}

pub mod partition {
    pub mod interval;
    pub mod partitionspec;
    pub mod partition;
    pub mod refinementschedule;
}

pub mod render {
    pub mod renderframe;
    pub mod resultassembler;
}

pub mod sum {
    pub mod sumvariant;
    pub mod samplingdensity;
    pub mod sumevaluator;
}
